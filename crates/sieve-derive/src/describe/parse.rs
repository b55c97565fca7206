// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Describable derive macro.
//!
//! Both container and field attributes are key-value style and parsed with
//! [`darling`]. Cross-field rules (a single identifier, at least one
//! declared field) are checked here after darling is done.
//!
//! # Data Structures
//!
//! ```text
//! DescribeDef
//! ├── ident: Ident              (struct name)
//! ├── route: Option<String>     (route name)
//! ├── expand: Option<bool>
//! ├── include_null: bool
//! ├── expose_meta: Option<bool>
//! ├── handler: Option<Path>
//! ├── id_index: usize           (into `fields`)
//! └── fields: Vec<FieldDef>     (declared fields only, in order)
//!     └── FieldDef
//!         ├── ident: Ident
//!         ├── kind: FieldKind   (Scalar, Nested, Many)
//!         ├── optional: bool    (wrapped in Option)
//!         ├── boxed: bool       (nested through Box)
//!         └── strategy: Option<Path>
//! ```

mod container;
mod field;

pub use container::ContainerAttrs;
use darling::FromDeriveInput;
pub use field::{FieldAttrs, FieldDef, FieldKind};
use syn::{Data, DataStruct, DeriveInput, Fields, Ident, Path};

/// Parsed derive input.
#[derive(Debug)]
pub struct DescribeDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Route name for `meta.href`.
    pub route: Option<String>,

    /// Collection expansion default, if set.
    pub expand: Option<bool>,

    /// Emit falsy values.
    pub include_null: bool,

    /// Attach metadata, if set.
    pub expose_meta: Option<bool>,

    /// Custom handler value.
    pub handler: Option<Path>,

    /// Declared fields in source order.
    pub fields: Vec<FieldDef>,

    /// Index of the identifier in `fields`.
    pub id_index: usize
}

impl DescribeDef {
    /// Parse and validate a derive input.
    ///
    /// # Errors
    ///
    /// - Applied to anything but a struct with named fields
    /// - Generic parameters
    /// - Invalid field options (see [`FieldDef::from_attrs`])
    /// - More than one `id` field
    /// - Every field skipped
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let named = matches!(
            &input.data,
            Data::Struct(DataStruct {
                fields: Fields::Named(_),
                ..
            })
        );
        if !named {
            return Err(darling::Error::custom(
                "Describable can only be derived for structs with named fields"
            )
            .with_span(&input.ident));
        }

        let attrs = ContainerAttrs::from_derive_input(input)?;

        if let Some(param) = attrs.generics.params.first() {
            return Err(
                darling::Error::custom("Describable cannot be derived for generic types").with_span(param)
            );
        }

        let raw = attrs
            .data
            .take_struct()
            .ok_or_else(|| darling::Error::unsupported_shape("enum").with_span(&attrs.ident))?;

        let mut errors = darling::Error::accumulator();
        let fields: Vec<FieldDef> = raw
            .fields
            .into_iter()
            .filter_map(|field| errors.handle(FieldDef::from_attrs(field)))
            .flatten()
            .collect();

        let marked: Vec<&FieldDef> = fields.iter().filter(|field| field.is_id).collect();
        if let Some(second) = marked.get(1) {
            errors.push(
                darling::Error::custom("only one field can be marked `id`").with_span(&second.ident)
            );
        }

        if fields.is_empty() {
            errors.push(
                darling::Error::custom("Describable requires at least one field that is not skipped")
                    .with_span(&attrs.ident)
            );
        }

        errors.finish()?;

        let id_index = fields
            .iter()
            .position(|field| field.is_id)
            .or_else(|| fields.iter().position(|field| field.ident == "id"))
            .unwrap_or(0);

        Ok(Self {
            ident: attrs.ident,
            route: attrs.route,
            expand: attrs.expand,
            include_null: attrs.include_null,
            expose_meta: attrs.expose_meta,
            handler: attrs.handler,
            fields,
            id_index
        })
    }

    /// The identifier field.
    #[must_use]
    pub fn id_field(&self) -> &FieldDef {
        &self.fields[self.id_index]
    }
}
