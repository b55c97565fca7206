// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-type serialization configuration.
//!
//! A [`Descriptor`] declares which attributes of a type are serializable and
//! how. It is immutable once built and normally lives in a `static`.
//!
//! # Defaults
//!
//! | Setting | Default | Meaning |
//! |---------|---------|---------|
//! | `attributes` | identifier only | Serializable attribute names, identifier first |
//! | `strategies` | none | Per-attribute transform functions |
//! | `route` | none | Named route used to build `meta.href` |
//! | `expand` | `true` | Collection members serialize fully |
//! | `include_null` | `false` | Emit falsy/empty values |
//! | `expose_meta` | `true` | Attach hyperlink/pagination metadata |
//! | `handler` | none | Alternative serializer for the type |
//!
//! # Example
//!
//! ```rust
//! use sieve_core::{Descriptor, Field};
//! use serde_json::Value;
//!
//! fn upper(field: &Field<'_>) -> Value {
//!     match field.as_scalar() {
//!         Some(Value::String(s)) => Value::String(s.to_uppercase()),
//!         _ => Value::Null
//!     }
//! }
//!
//! let descriptor = Descriptor::new("id")
//!     .attributes(["name", "kind"])
//!     .strategy("kind", upper)
//!     .route("models")
//!     .expand(false);
//!
//! assert_eq!(descriptor.identifier(), "id");
//! assert!(descriptor.declares("kind"));
//! assert!(!descriptor.expands());
//! ```

use std::{collections::HashMap, fmt, sync::Arc};

use serde_json::Value;

use crate::{Error, Field, Node, Serializer};

/// Transform applied to one attribute's raw value.
///
/// Must be pure. Its return value is emitted verbatim, bypassing recursion
/// and metadata.
pub type Strategy = fn(&Field<'_>) -> Value;

/// Alternative serializer for a type.
///
/// A handler replaces the built-in single-object path. It may call
/// [`Serializer::serialize_object_default`] and post-process the result.
pub trait Handler: Send + Sync {
    /// Produce the output for one object.
    ///
    /// # Errors
    ///
    /// Propagates router failures or the handler's own failures.
    fn serialize(&self, serializer: &Serializer<'_>, node: &Node<'_>) -> Result<Value, Error>;
}

/// Immutable per-type configuration.
#[derive(Clone)]
pub struct Descriptor {
    attributes:   Vec<&'static str>,
    strategies:   HashMap<&'static str, Strategy>,
    route:        Option<String>,
    expand:       bool,
    include_null: bool,
    expose_meta:  bool,
    handler:      Option<Arc<dyn Handler>>
}

impl Descriptor {
    /// Create a descriptor whose identifier is `identifier`.
    ///
    /// The identifier is always the first declared attribute.
    pub fn new(identifier: &'static str) -> Self {
        Self {
            attributes:   vec![identifier],
            strategies:   HashMap::new(),
            route:        None,
            expand:       true,
            include_null: false,
            expose_meta:  true,
            handler:      None
        }
    }

    /// Declare one more attribute. Duplicates are ignored.
    #[must_use]
    pub fn attribute(mut self, name: &'static str) -> Self {
        if !self.attributes.contains(&name) {
            self.attributes.push(name);
        }
        self
    }

    /// Declare several attributes in order.
    #[must_use]
    pub fn attributes<I>(self, names: I) -> Self
    where
        I: IntoIterator<Item = &'static str>
    {
        names.into_iter().fold(self, Self::attribute)
    }

    /// Register a transform for `name`.
    #[must_use]
    pub fn strategy(mut self, name: &'static str, strategy: Strategy) -> Self {
        self.strategies.insert(name, strategy);
        self
    }

    /// Set the route used for `meta.href`.
    #[must_use]
    pub fn route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Whether collection members serialize fully by default.
    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Whether falsy/empty attribute values are emitted.
    #[must_use]
    pub fn include_null(mut self, include_null: bool) -> Self {
        self.include_null = include_null;
        self
    }

    /// Whether metadata is attached.
    #[must_use]
    pub fn expose_meta(mut self, expose_meta: bool) -> Self {
        self.expose_meta = expose_meta;
        self
    }

    /// Serialize this type through `handler` instead of the built-in path.
    #[must_use]
    pub fn handler<H>(mut self, handler: H) -> Self
    where
        H: Handler + 'static
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// The identifier attribute.
    pub fn identifier(&self) -> &'static str {
        self.attributes[0]
    }

    /// All declared attributes, identifier first.
    pub fn attribute_names(&self) -> &[&'static str] {
        &self.attributes
    }

    /// Whether `name` is a declared attribute.
    pub fn declares(&self, name: &str) -> bool {
        self.attributes.iter().any(|attr| *attr == name)
    }

    /// Transform registered for `name`.
    pub fn strategy_for(&self, name: &str) -> Option<Strategy> {
        self.strategies.get(name).copied()
    }

    /// Route name, if any.
    pub fn route_name(&self) -> Option<&str> {
        self.route.as_deref()
    }

    /// Default expansion of collection members.
    pub const fn expands(&self) -> bool {
        self.expand
    }

    /// Default emission of falsy values.
    pub const fn includes_null(&self) -> bool {
        self.include_null
    }

    /// Whether metadata is attached.
    pub const fn exposes_meta(&self) -> bool {
        self.expose_meta
    }

    /// Custom handler, if any.
    pub fn custom_handler(&self) -> Option<&dyn Handler> {
        self.handler.as_deref()
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut strategies: Vec<_> = self.strategies.keys().collect();
        strategies.sort_unstable();
        f.debug_struct("Descriptor")
            .field("attributes", &self.attributes)
            .field("strategies", &strategies)
            .field("route", &self.route)
            .field("expand", &self.expand)
            .field("include_null", &self.include_null)
            .field("expose_meta", &self.expose_meta)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}
