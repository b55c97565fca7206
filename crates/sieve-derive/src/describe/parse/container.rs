// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `route` | No | none | Route name used to build `meta.href` |
//! | `expand` | No | `true` | Collection members serialize fully |
//! | `include_null` | No | `false` | Emit falsy/empty values |
//! | `expose_meta` | No | `true` | Attach hyperlink/pagination metadata |
//! | `handler` | No | none | Path to a value implementing `Handler` |

use darling::{FromDeriveInput, ast::Data};
use syn::{Generics, Ident, Path};

use super::FieldAttrs;

/// Attributes parsed from `#[describe(...)]` on the struct.
///
/// # Example
///
/// ```rust,ignore
/// #[describe(route = "models", expand = false, include_null)]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(describe), supports(struct_named))]
pub struct ContainerAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Generic parameters; must be empty.
    pub generics: Generics,

    /// Struct fields.
    pub data: Data<(), FieldAttrs>,

    /// Route name.
    #[darling(default)]
    pub route: Option<String>,

    /// Collection expansion default.
    #[darling(default)]
    pub expand: Option<bool>,

    /// Emit falsy values.
    #[darling(default)]
    pub include_null: bool,

    /// Attach metadata.
    #[darling(default)]
    pub expose_meta: Option<bool>,

    /// Custom handler, e.g. `handler = "Envelope"`.
    #[darling(default)]
    pub handler: Option<Path>
}
