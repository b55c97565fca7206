// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The [`Describable`] capability and raw attribute values.
//!
//! A describable type exposes two things to the engine: its [`Descriptor`]
//! and a way to read declared attributes by name. Reads go through an
//! explicit accessor map instead of reflection, so an attribute with no
//! registered accessor is simply absent.
//!
//! # Example
//!
//! ```rust
//! use sieve_core::{Accessors, Describable, Descriptor, Field};
//! use std::sync::LazyLock;
//!
//! struct Tag {
//!     id:    u32,
//!     label: String
//! }
//!
//! static TAG: LazyLock<Descriptor> =
//!     LazyLock::new(|| Descriptor::new("id").attribute("label"));
//!
//! static TAG_FIELDS: LazyLock<Accessors<Tag>> = LazyLock::new(|| {
//!     Accessors::<Tag>::new()
//!         .with("id", |tag| Field::scalar(&tag.id))
//!         .with("label", |tag| Field::scalar(&tag.label))
//! });
//!
//! impl Describable for Tag {
//!     fn descriptor(&self) -> &Descriptor {
//!         &TAG
//!     }
//!
//!     fn field(&self, name: &str) -> Option<Field<'_>> {
//!         TAG_FIELDS.get(self, name)
//!     }
//! }
//! ```

use std::{collections::HashMap, fmt};

use serde::Serialize;
use serde_json::Value;

use crate::{Descriptor, Error};

/// A type the engine knows how to walk.
///
/// Object safe: nested values are handled as `&dyn Describable`.
pub trait Describable {
    /// Per-type configuration.
    fn descriptor(&self) -> &Descriptor;

    /// Read a declared attribute.
    ///
    /// Returns `None` when the instance has no accessor for `name`; the
    /// engine skips such attributes without failing.
    fn field(&self, name: &str) -> Option<Field<'_>>;

    /// Name of the concrete type, used in logs and error payloads.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl fmt::Debug for dyn Describable + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Describable")
            .field("type", &self.type_name())
            .field("identifier", &self.descriptor().identifier())
            .finish()
    }
}

/// Raw value of one attribute, before selection rules are applied.
#[derive(Debug)]
pub enum Field<'a> {
    /// Plain value, emitted as-is.
    Scalar(Value),

    /// A single nested describable object.
    Object(&'a dyn Describable),

    /// A collection of describable objects.
    List(Vec<&'a dyn Describable>)
}

impl<'a> Field<'a> {
    /// Scalar from any serializable value.
    ///
    /// Values serde_json cannot represent (maps with non-string keys) become
    /// `null` and are reported with a `warn` event. Use [`Field::try_scalar`]
    /// to handle the failure instead.
    pub fn scalar<S>(value: &S) -> Self
    where
        S: Serialize + ?Sized
    {
        Self::try_scalar(value).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "attribute value replaced with null");
            Self::null()
        })
    }

    /// Scalar from any serializable value, failing when serde_json cannot
    /// represent it.
    ///
    /// # Errors
    ///
    /// [`Error::Serialize`] when the value's `Serialize` impl fails.
    pub fn try_scalar<S>(value: &S) -> Result<Self, Error>
    where
        S: Serialize + ?Sized
    {
        Ok(Self::Scalar(serde_json::to_value(value)?))
    }

    /// The `null` scalar.
    pub const fn null() -> Self {
        Self::Scalar(Value::Null)
    }

    /// A nested describable object.
    pub fn object<T>(value: &'a T) -> Self
    where
        T: Describable
    {
        Self::Object(value)
    }

    /// A nested collection of describable objects.
    pub fn list<T>(items: &'a [T]) -> Self
    where
        T: Describable
    {
        Self::List(items.iter().map(|item| item as &dyn Describable).collect())
    }

    /// Whether the value counts as present.
    ///
    /// `null`, `false`, zero, and empty strings, arrays, maps and lists are
    /// falsy. Nested objects are always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Scalar(value) => match value {
                Value::Null => false,
                Value::Bool(flag) => *flag,
                Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
                Value::String(text) => !text.is_empty(),
                Value::Array(items) => !items.is_empty(),
                Value::Object(map) => !map.is_empty()
            },
            Self::Object(_) => true,
            Self::List(items) => !items.is_empty()
        }
    }

    /// The scalar value, if this is one.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None
        }
    }

    /// Take the scalar value, if this is one.
    pub fn into_scalar(self) -> Option<Value> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None
        }
    }

    /// The nested object, if this is one.
    pub fn as_object(&self) -> Option<&'a dyn Describable> {
        match self {
            Self::Object(object) => Some(*object),
            _ => None
        }
    }
}

/// Accessor function for one attribute of `T`.
pub type Accessor<T> = for<'a> fn(&'a T) -> Field<'a>;

/// Explicit `{name -> accessor}` map for a describable type.
///
/// Built once per type, usually inside a `LazyLock`.
pub struct Accessors<T> {
    map: HashMap<&'static str, Accessor<T>>
}

impl<T> Accessors<T> {
    /// Empty map.
    pub fn new() -> Self {
        Self {
            map: HashMap::new()
        }
    }

    /// Register an accessor, replacing any previous one for `name`.
    #[must_use]
    pub fn with(mut self, name: &'static str, accessor: Accessor<T>) -> Self {
        self.map.insert(name, accessor);
        self
    }

    /// Read `name` from `this`, or `None` if nothing is registered.
    pub fn get<'a>(&self, this: &'a T, name: &str) -> Option<Field<'a>> {
        self.map.get(name).map(|accessor| accessor(this))
    }

    /// Whether an accessor is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of registered accessors.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no accessor is registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<T> Default for Accessors<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Accessors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.map.keys().collect();
        names.sort_unstable();
        f.debug_struct("Accessors").field("names", &names).finish()
    }
}
