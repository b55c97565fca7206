// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Derive macro for sieve.
//!
//! Implements `Describable` for a struct with named fields: a static
//! `Descriptor` built from the `#[describe(...)]` attributes and a static
//! accessor map with one read function per declared field. Generated code
//! refers to items through the `sieve` facade crate.
//!
//! # Attribute Quick Reference
//!
//! ## Container-Level `#[describe(...)]`
//!
//! ```rust,ignore
//! #[derive(Describable)]
//! #[describe(
//!     route = "users",          // Optional: route name for `meta.href`
//!     expand = false,           // Optional: list members identifier-only (default: true)
//!     include_null,             // Optional: emit falsy values (default: off)
//!     expose_meta = false,      // Optional: no hyperlink/pagination meta (default: true)
//!     handler = "UserHandler"   // Optional: value implementing `Handler`
//! )]
//! pub struct User { /* ... */ }
//! ```
//!
//! ## Field-Level `#[describe(...)]`
//!
//! ```rust,ignore
//! pub struct User {
//!     #[describe(id)]                      // Identifier (default: `id`, else first field)
//!     pub uuid: Uuid,
//!
//!     pub name: String,                    // Plain value, via `serde::Serialize`
//!
//!     #[describe(skip)]                    // Never emitted, never requestable
//!     pub password_hash: String,
//!
//!     #[describe(nested)]                  // `T`, `Box<T>`, `Option<T>`, `Option<Box<T>>`
//!     pub team: Option<Team>,
//!
//!     #[describe(many)]                    // `Vec<T>`, `Option<Vec<T>>`
//!     pub roles: Vec<Role>,
//!
//!     #[describe(strategy = "role_label")] // `fn(&Field<'_>) -> Value`
//!     pub kind: Kind,
//! }
//! ```
//!
//! Declared attributes appear in output in field order, identifier first.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod describe;

use proc_macro::TokenStream;

/// Derive `Describable` for a struct with named fields.
///
/// # Example
///
/// ```rust,ignore
/// use sieve::Describable;
///
/// #[derive(Describable)]
/// #[describe(route = "models")]
/// pub struct Model {
///     pub id: u32,
///     pub name: Option<String>,
///     #[describe(many)]
///     pub instances: Vec<SubModel>,
/// }
/// ```
///
/// # Errors
///
/// Compile errors point at the offending item for:
///
/// | Problem | Reported on |
/// |---------|-------------|
/// | enum, union or tuple struct | the type |
/// | generic parameters | the generics |
/// | more than one `id` | the second `id` field |
/// | `nested` together with `many` | the field |
/// | `skip` together with any other option | the field |
/// | every field skipped | the type |
/// | unknown key | the key |
#[proc_macro_derive(Describable, attributes(describe))]
pub fn derive_describable(input: TokenStream) -> TokenStream {
    describe::derive(input)
}
