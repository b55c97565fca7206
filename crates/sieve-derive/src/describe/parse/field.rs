// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! | Option | Effect |
//! |--------|--------|
//! | `id` | Field is the identifier |
//! | `skip` | Field is not declared and cannot be requested |
//! | `nested` | Single describable value |
//! | `many` | Collection of describable values |
//! | `strategy = "path"` | Transform applied to the raw value |
//!
//! Wrapper types are recognised by their last path segment, so
//! `std::option::Option<T>` and `Option<T>` are treated alike.

use darling::FromField;
use syn::{GenericArgument, Ident, Path, PathArguments, Type, ext::IdentExt};

/// Raw `#[describe(...)]` options on one field.
#[derive(Debug, FromField)]
#[darling(attributes(describe))]
pub struct FieldAttrs {
    /// Field identifier.
    pub ident: Option<Ident>,

    /// Field type.
    pub ty: Type,

    /// Identifier marker.
    #[darling(default)]
    pub id: bool,

    /// Not declared.
    #[darling(default)]
    pub skip: bool,

    /// Single describable.
    #[darling(default)]
    pub nested: bool,

    /// Collection of describables.
    #[darling(default)]
    pub many: bool,

    /// Transform function.
    #[darling(default)]
    pub strategy: Option<Path>
}

/// How the field's value is handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any `serde::Serialize` value.
    Scalar,

    /// One describable object.
    Nested,

    /// A list of describable objects.
    Many
}

/// A declared field.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier, also the attribute name.
    pub ident: Ident,

    /// Value handling.
    pub kind: FieldKind,

    /// Type is `Option<...>`.
    pub optional: bool,

    /// Nested value is behind a `Box`.
    pub boxed: bool,

    /// Marked `id`.
    pub is_id: bool,

    /// Registered transform.
    pub strategy: Option<Path>
}

impl FieldDef {
    /// Validate raw options.
    ///
    /// Returns `Ok(None)` for skipped fields.
    ///
    /// # Errors
    ///
    /// - `nested` together with `many`
    /// - `skip` together with any other option
    pub fn from_attrs(attrs: FieldAttrs) -> darling::Result<Option<Self>> {
        let ident = attrs
            .ident
            .ok_or_else(|| darling::Error::custom("Describable fields must be named").with_span(&attrs.ty))?;

        if attrs.skip {
            if attrs.id || attrs.nested || attrs.many || attrs.strategy.is_some() {
                return Err(darling::Error::custom("`skip` cannot be combined with other options")
                    .with_span(&ident));
            }
            return Ok(None);
        }

        let kind = match (attrs.nested, attrs.many) {
            (true, true) => {
                return Err(darling::Error::custom("`nested` and `many` are mutually exclusive")
                    .with_span(&ident));
            }
            (true, false) => FieldKind::Nested,
            (false, true) => FieldKind::Many,
            (false, false) => FieldKind::Scalar
        };

        let inner = option_inner(&attrs.ty);
        let optional = inner.is_some();
        let boxed = kind == FieldKind::Nested && is_wrapper(inner.unwrap_or(&attrs.ty), "Box");

        Ok(Some(Self {
            ident,
            kind,
            optional,
            boxed,
            is_id: attrs.id,
            strategy: attrs.strategy
        }))
    }

    /// Attribute name, without any `r#` prefix.
    #[must_use]
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// `T` for `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None
    })
}

fn is_wrapper(ty: &Type, name: &str) -> bool {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
    {
        return segment.ident == name;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(tokens: syn::Field) -> darling::Result<Option<FieldDef>> {
        FieldDef::from_attrs(FieldAttrs::from_field(&tokens)?)
    }

    fn named(field: syn::FieldsNamed) -> syn::Field {
        field.named.into_iter().next().unwrap()
    }

    #[test]
    fn plain_field_is_scalar() {
        let def = field(named(syn::parse_quote!({ pub name: String })))
            .unwrap()
            .unwrap();
        assert_eq!(def.kind, FieldKind::Scalar);
        assert!(!def.optional);
        assert_eq!(def.name(), "name");
    }

    #[test]
    fn option_detected() {
        let def = field(named(syn::parse_quote!({
            #[describe(nested)]
            pub owner: Option<User>
        })))
        .unwrap()
        .unwrap();
        assert_eq!(def.kind, FieldKind::Nested);
        assert!(def.optional);
        assert!(!def.boxed);
    }

    #[test]
    fn boxed_nested() {
        let def = field(named(syn::parse_quote!({
            #[describe(nested)]
            pub parent: Option<Box<Node>>
        })))
        .unwrap()
        .unwrap();
        assert!(def.optional);
        assert!(def.boxed);
    }

    #[test]
    fn raw_identifier_name() {
        let def = field(named(syn::parse_quote!({ pub r#type: String })))
            .unwrap()
            .unwrap();
        assert_eq!(def.name(), "type");
    }

    #[test]
    fn strategy_path() {
        let def = field(named(syn::parse_quote!({
            #[describe(strategy = "labels::kind")]
            pub kind: Kind
        })))
        .unwrap()
        .unwrap();
        let path = def.strategy.unwrap();
        assert_eq!(quote::quote!(#path).to_string(), "labels :: kind");
    }

    #[test]
    fn skipped_field_is_none() {
        let def = field(named(syn::parse_quote!({
            #[describe(skip)]
            pub secret: String
        })))
        .unwrap();
        assert!(def.is_none());
    }

    #[test]
    fn skip_with_other_option_fails() {
        let err = field(named(syn::parse_quote!({
            #[describe(skip, id)]
            pub secret: String
        })))
        .unwrap_err();
        assert!(err.to_string().contains("skip"));
    }

    #[test]
    fn nested_and_many_fail() {
        let err = field(named(syn::parse_quote!({
            #[describe(nested, many)]
            pub items: Vec<Item>
        })))
        .unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn unknown_option_fails() {
        let tokens = named(syn::parse_quote!({
            #[describe(flatten)]
            pub items: Vec<Item>
        }));
        assert!(FieldAttrs::from_field(&tokens).is_err());
    }
}
