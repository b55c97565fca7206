// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core engine for sieve.
//!
//! Turns typed domain objects, lists of them and paginated result sets into
//! [`serde_json::Value`] trees, shaped by the `include`, `exclude` and
//! `expand` directives of a request. Types opt in through [`Describable`],
//! usually derived with `sieve`'s `#[derive(Describable)]`.
//!
//! # Overview
//!
//! | Item | Role |
//! |------|------|
//! | [`split_top_level`], [`parse_expand`], [`expand_entries`] | Expression parsing |
//! | [`select`] | Attribute selection for one object |
//! | [`Serializer`] | Recursive walk of objects and collections |
//! | [`Descriptor`] | Per-type configuration |
//! | [`Router`], [`RouteTable`] | Hyperlink assembly |
//! | [`Paginate`], [`Paginated`] | Pagination metadata source |
//! | [`ApiError`] | Describable error response |
//! | [`prelude`] | Convenient re-exports |
//!
//! # Usage
//!
//! ```rust,ignore
//! use sieve_core::prelude::*;
//!
//! let routes = RouteTable::new().route("users", "/users[/:id]");
//! let directives = Directives::from_pairs(query_pairs);
//! let body = Serializer::new(&routes).serialize(Subject::many(&users), &directives)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api_error;
mod describable;
mod descriptor;
mod directives;
mod error;
mod expression;
mod meta;
mod pagination;
pub mod prelude;
mod router;
mod selection;
mod serializer;

pub use api_error::{ApiError, DEFAULT_MESSAGE, DEFAULT_STATUS};
pub use describable::{Accessor, Accessors, Describable, Field};
pub use descriptor::{Descriptor, Handler, Strategy};
pub use directives::{Directives, EXCLUDE, EXPAND, INCLUDE};
pub use error::Error;
pub use expression::{Expansions, classify, expand_entries, normalize, parse_expand, split_top_level};
pub use meta::{ITEMS, META};
pub use pagination::{PageMarker, PageRequest, Paginate, Paginated};
pub use router::{RouteTable, Router};
pub use selection::{Selection, WILDCARD, resolve, select};
pub use serializer::{Node, Overrides, Rendered, Serializer, Subject};
