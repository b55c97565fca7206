// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code generation for `impl Describable`.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::sieve::Describable for Model {
//!     fn descriptor(&self) -> &::sieve::Descriptor {
//!         static DESCRIPTOR: LazyLock<Descriptor> = LazyLock::new(|| {
//!             Descriptor::new("id").attributes(["id", "owner"]).route("models")
//!         });
//!         &DESCRIPTOR
//!     }
//!
//!     fn field(&self, name: &str) -> Option<Field<'_>> {
//!         fn read_id(this: &Model) -> Field<'_> { Field::scalar(&this.id) }
//!         fn read_owner(this: &Model) -> Field<'_> {
//!             match &this.owner {
//!                 Some(value) => Field::object(value),
//!                 None => Field::null()
//!             }
//!         }
//!         static FIELDS: LazyLock<Accessors<Model>> = LazyLock::new(|| {
//!             Accessors::<Model>::new().with("id", read_id).with("owner", read_owner)
//!         });
//!         FIELDS.get(self, name)
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::{DescribeDef, FieldDef, FieldKind};

/// Generate the trait implementation.
pub fn generate(def: &DescribeDef) -> TokenStream {
    let ident = &def.ident;
    let type_name = ident.to_string();
    let descriptor = descriptor(def);
    let readers: Vec<TokenStream> = def.fields.iter().map(|field| reader(def, field)).collect();
    let registrations = def.fields.iter().map(|field| {
        let name = field.name();
        let reader = reader_ident(field);
        quote! { .with(#name, #reader) }
    });

    quote! {
        impl ::sieve::Describable for #ident {
            fn descriptor(&self) -> &::sieve::Descriptor {
                static DESCRIPTOR: ::std::sync::LazyLock<::sieve::Descriptor> =
                    ::std::sync::LazyLock::new(|| #descriptor);
                &DESCRIPTOR
            }

            fn field(&self, name: &str) -> ::core::option::Option<::sieve::Field<'_>> {
                #(#readers)*

                static FIELDS: ::std::sync::LazyLock<::sieve::Accessors<#ident>> =
                    ::std::sync::LazyLock::new(|| ::sieve::Accessors::<#ident>::new() #(#registrations)*);
                FIELDS.get(self, name)
            }

            fn type_name(&self) -> &'static str {
                #type_name
            }
        }
    }
}

fn descriptor(def: &DescribeDef) -> TokenStream {
    let identifier = def.id_field().name();
    let names = def.fields.iter().map(FieldDef::name);
    let strategies = def.fields.iter().filter_map(|field| {
        let path = field.strategy.as_ref()?;
        let name = field.name();
        Some(quote! { .strategy(#name, #path) })
    });
    let route = def.route.as_ref().map(|route| quote! { .route(#route) });
    let expand = def.expand.map(|expand| quote! { .expand(#expand) });
    let include_null = def.include_null.then(|| quote! { .include_null(true) });
    let expose_meta = def.expose_meta.map(|expose| quote! { .expose_meta(#expose) });
    let handler = def.handler.as_ref().map(|handler| quote! { .handler(#handler) });

    quote! {
        ::sieve::Descriptor::new(#identifier)
            .attributes([#(#names),*])
            #(#strategies)*
            #route
            #expand
            #include_null
            #expose_meta
            #handler
    }
}

fn reader_ident(field: &FieldDef) -> proc_macro2::Ident {
    format_ident!("read_{}", field.ident)
}

fn reader(def: &DescribeDef, field: &FieldDef) -> TokenStream {
    let ident = &def.ident;
    let member = &field.ident;
    let reader = reader_ident(field);

    let body = match (field.kind, field.optional) {
        (FieldKind::Scalar, _) => quote! { ::sieve::Field::scalar(&this.#member) },
        (FieldKind::Nested, false) => {
            let value = if field.boxed {
                quote! { &*this.#member }
            } else {
                quote! { &this.#member }
            };
            quote! { ::sieve::Field::object(#value) }
        }
        (FieldKind::Nested, true) => {
            let value = if field.boxed {
                quote! { &**value }
            } else {
                quote! { value }
            };
            quote! {
                match &this.#member {
                    ::core::option::Option::Some(value) => ::sieve::Field::object(#value),
                    ::core::option::Option::None => ::sieve::Field::null()
                }
            }
        }
        (FieldKind::Many, false) => quote! { ::sieve::Field::list(&this.#member) },
        (FieldKind::Many, true) => quote! {
            match &this.#member {
                ::core::option::Option::Some(items) => ::sieve::Field::list(items),
                ::core::option::Option::None => ::sieve::Field::null()
            }
        }
    };

    quote! {
        fn #reader(this: &#ident) -> ::sieve::Field<'_> {
            #body
        }
    }
}
