// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # sieve
//!
//! Field-selection serialization for REST responses. Re-exports:
//! - [`Describable`](macro@Describable) derive macro from `sieve-derive`
//! - All types from `sieve-core` ([`Serializer`], [`Directives`],
//!   [`Descriptor`], [`RouteTable`], [`Paginated`], [`ApiError`])
//!
//! # Quick Start
//!
//! ```rust
//! use sieve::{Describable, Directives, RouteTable, Serializer, Subject};
//! use serde_json::json;
//!
//! #[derive(Describable)]
//! #[describe(route = "users")]
//! pub struct User {
//!     pub id: u32,
//!     pub name: String,
//!     #[describe(skip)]
//!     pub password_hash: String,
//! }
//!
//! let routes = RouteTable::new().route("users", "/users[/:id]");
//! let user = User { id: 7, name: "Ada".into(), password_hash: "x".into() };
//!
//! // GET /users/7?include=id
//! let directives = Directives::from_pairs([("include", "id")]);
//! let body = Serializer::new(&routes).serialize(Subject::one(&user), &directives).unwrap();
//!
//! assert_eq!(body, json!({"id": 7, "meta": {"href": "/users/7"}}));
//! ```
//!
//! # Directives
//!
//! | Query | Effect |
//! |-------|--------|
//! | `include=id,name` | Only the identifier and `name` |
//! | `include=*` | Every declared attribute, falsy ones too |
//! | `exclude=name` | Everything except `name`; the identifier stays |
//! | `expand=owner` | Serialize `owner` fully instead of its identifier |
//! | `expand=owner(name,team(id))` | Expand with a sub-selection, recursively |

pub use sieve_core::*;
pub use sieve_derive::Describable;
