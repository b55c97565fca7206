// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Describable derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! describe.rs (orchestrator)
//! │
//! ├── parse/         → Attribute parsing (DescribeDef, FieldDef)
//! │   ├── container.rs → #[describe(...)] on the struct
//! │   └── field.rs     → #[describe(...)] on fields
//! │
//! └── generate.rs    → impl Describable (descriptor + accessor map)
//! ```
//!
//! # Generated Code
//!
//! For a struct like:
//!
//! ```rust,ignore
//! #[derive(Describable)]
//! #[describe(route = "models")]
//! pub struct Model {
//!     pub id: u32,
//!     #[describe(nested)]
//!     pub owner: Option<User>,
//! }
//! ```
//!
//! The macro generates:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `impl Describable for Model` | Trait implementation |
//! | `static DESCRIPTOR` | `Descriptor::new("id").attributes(["owner"]).route("models")` |
//! | `static FIELDS` | `Accessors<Model>` with one read function per attribute |

mod generate;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::DescribeDef;

/// Main entry point for the Describable derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match DescribeDef::from_derive_input(&input) {
        Ok(def) => generate::generate(&def).into(),
        Err(err) => err.write_errors().into()
    }
}
