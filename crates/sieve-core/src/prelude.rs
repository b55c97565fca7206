// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sieve_core::prelude::*;
//! ```

pub use crate::{
    Accessors, ApiError, Describable, Descriptor, Directives, Error, Field, Handler, Node,
    Paginate, Paginated, RouteTable, Router, Serializer, Subject
};
