// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Recursive serializer.
//!
//! Walks an object graph and produces a [`serde_json::Value`] under the
//! caller's [`Directives`]. Every node is handled with its own immutable
//! scope, so flags set for one object never reach its siblings or parent.
//!
//! # Value Rules
//!
//! For each selected attribute, first match wins:
//!
//! | Raw value | Output |
//! |-----------|--------|
//! | absent on the instance | skipped |
//! | falsy, `include_null` off | skipped |
//! | list of describables | collection-wrapper, children directed by the sub-expression |
//! | has a strategy | strategy result, verbatim |
//! | describable object | nested output, identifier only unless sub-includes given |
//! | scalar | as-is |
//!
//! # Example
//!
//! ```rust
//! use sieve_core::{Accessors, Describable, Descriptor, Directives, Field, RouteTable, Serializer, Subject};
//! use serde_json::json;
//! use std::sync::LazyLock;
//!
//! struct Post {
//!     id:    u32,
//!     title: String
//! }
//!
//! static POST: LazyLock<Descriptor> =
//!     LazyLock::new(|| Descriptor::new("id").attribute("title").route("posts"));
//! static POST_FIELDS: LazyLock<Accessors<Post>> = LazyLock::new(|| {
//!     Accessors::<Post>::new()
//!         .with("id", |post| Field::scalar(&post.id))
//!         .with("title", |post| Field::scalar(&post.title))
//! });
//!
//! impl Describable for Post {
//!     fn descriptor(&self) -> &Descriptor {
//!         &POST
//!     }
//!
//!     fn field(&self, name: &str) -> Option<Field<'_>> {
//!         POST_FIELDS.get(self, name)
//!     }
//! }
//!
//! let routes = RouteTable::new().route("posts", "/posts[/:id]");
//! let serializer = Serializer::new(&routes);
//! let post = Post { id: 1, title: "Hello".into() };
//!
//! let output = serializer.serialize(Subject::one(&post), &Directives::new()).unwrap();
//! assert_eq!(output, json!({"id": 1, "title": "Hello", "meta": {"href": "/posts/1"}}));
//! ```

use std::{collections::HashMap, fmt};

use serde_json::{Map, Value};

use crate::{
    ApiError, Describable, Descriptor, Directives, Error, Field, Paginate, Router,
    expression::{classify, expand_entries},
    meta,
    selection::{resolve, select}
};

/// Input to a serialization call.
#[derive(Debug)]
pub enum Subject<'a> {
    /// Nothing; serializes to `null`.
    None,

    /// A single object.
    One(&'a dyn Describable),

    /// A plain collection.
    Many(Vec<&'a dyn Describable>),

    /// A paginated collection.
    Page(&'a dyn Paginate)
}

impl<'a> Subject<'a> {
    /// A single object.
    pub fn one<T>(object: &'a T) -> Self
    where
        T: Describable
    {
        Self::One(object)
    }

    /// A plain collection.
    pub fn many<T>(items: &'a [T]) -> Self
    where
        T: Describable
    {
        Self::Many(items.iter().map(|item| item as &dyn Describable).collect())
    }

    /// A paginated collection.
    pub fn page<P>(page: &'a P) -> Self
    where
        P: Paginate
    {
        Self::Page(page)
    }
}

impl<'a> From<Option<&'a dyn Describable>> for Subject<'a> {
    fn from(object: Option<&'a dyn Describable>) -> Self {
        object.map_or(Self::None, Self::One)
    }
}

/// Per-node settings that take precedence over the descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Forced collection expansion.
    pub expand: Option<bool>,

    /// Forced emission of falsy values.
    pub include_null: Option<bool>
}

/// One object together with the directives that apply to it.
#[derive(Debug, Clone, Copy)]
pub struct Node<'n> {
    object:     &'n dyn Describable,
    directives: &'n Directives,
    overrides:  Overrides
}

impl<'n> Node<'n> {
    /// Node with no overrides.
    pub fn new(object: &'n dyn Describable, directives: &'n Directives) -> Self {
        Self {
            object,
            directives,
            overrides: Overrides::default()
        }
    }

    /// Replace the overrides.
    #[must_use]
    pub const fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// The object being serialized.
    pub fn object(&self) -> &'n dyn Describable {
        self.object
    }

    /// Directives for this node.
    pub const fn directives(&self) -> &'n Directives {
        self.directives
    }

    /// Overrides for this node.
    pub const fn overrides(&self) -> Overrides {
        self.overrides
    }
}

/// Effective configuration of one node.
struct Scope<'d> {
    descriptor:   &'d Descriptor,
    include_null: bool
}

impl<'d> Scope<'d> {
    fn bind(object: &'d dyn Describable, overrides: Overrides) -> Self {
        let descriptor = object.descriptor();
        let include_null = overrides.include_null.unwrap_or(descriptor.includes_null());
        tracing::trace!(
            type_name = object.type_name(),
            include_null,
            "bound descriptor"
        );
        Self {
            descriptor,
            include_null
        }
    }
}

/// Output of [`Serializer::respond`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// HTTP status to set; only present for errors.
    pub status: Option<u16>,

    /// Serialized body.
    pub body: Value
}

/// Entry point of the engine.
///
/// Holds only read-only state and can be shared freely.
#[derive(Clone, Copy)]
pub struct Serializer<'r> {
    router:       &'r dyn Router,
    include_null: Option<bool>
}

impl fmt::Debug for Serializer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializer")
            .field("include_null", &self.include_null)
            .finish_non_exhaustive()
    }
}

impl<'r> Serializer<'r> {
    /// Serializer assembling hyperlinks with `router`.
    pub fn new(router: &'r dyn Router) -> Self {
        Self {
            router,
            include_null: None
        }
    }

    /// Force emission of falsy values for top-level objects.
    #[must_use]
    pub const fn include_null(mut self, include_null: bool) -> Self {
        self.include_null = Some(include_null);
        self
    }

    /// The router used for hyperlinks.
    pub fn router(&self) -> &'r dyn Router {
        self.router
    }

    /// Serialize `subject` under `directives`.
    ///
    /// # Errors
    ///
    /// Router failures and custom handler failures. Malformed directives
    /// never fail.
    pub fn serialize(&self, subject: Subject<'_>, directives: &Directives) -> Result<Value, Error> {
        let overrides = Overrides {
            expand:       None,
            include_null: self.include_null
        };
        match subject {
            Subject::None => Ok(Value::Null),
            Subject::One(object) => self.object(&Node::new(object, directives).with_overrides(overrides)),
            Subject::Many(items) => self.collection(&items, None, directives, overrides),
            Subject::Page(page) => self.collection(&page.items(), Some(page), directives, overrides)
        }
    }

    /// Serialize the outcome of a request handler.
    ///
    /// A failure is serialized as the error object and reports its status.
    ///
    /// # Errors
    ///
    /// Same as [`Serializer::serialize`].
    pub fn respond(
        &self,
        outcome: Result<Subject<'_>, ApiError>,
        directives: &Directives
    ) -> Result<Rendered, Error> {
        match outcome {
            Ok(subject) => Ok(Rendered {
                status: None,
                body:   self.serialize(subject, directives)?
            }),
            Err(error) => {
                tracing::debug!(status = error.status(), code = %error.code(), "rendering error");
                Ok(Rendered {
                    status: Some(error.status()),
                    body:   self.serialize(Subject::one(&error), directives)?
                })
            }
        }
    }

    /// Built-in serialization of a single object.
    ///
    /// Custom handlers call this to reuse the default behaviour.
    ///
    /// # Errors
    ///
    /// Router failures, or failures of handlers reached through nested
    /// values.
    pub fn serialize_object_default(&self, node: &Node<'_>) -> Result<Value, Error> {
        let object = node.object;
        let directives = node.directives;
        let scope = Scope::bind(object, node.overrides);
        let descriptor = scope.descriptor;

        let expansions = expand_entries(&directives.expand);
        let expand_names: Vec<&str> = expansions.iter().map(|(name, _)| name.as_str()).collect();
        let selection = select(descriptor, &expand_names, &directives.include, &directives.exclude);
        let include_null = scope.include_null || selection.wildcard;

        let mut children: HashMap<&'static str, &[String]> = HashMap::new();
        for (name, sub) in &expansions {
            let Some(attr) = resolve(descriptor, name) else {
                continue;
            };
            match sub {
                Some(sub) => children.insert(attr, sub.as_slice()),
                None => children.remove(attr)
            };
        }

        let mut output = Map::new();
        for &attr in &selection.attributes {
            let Some(field) = object.field(attr) else {
                tracing::trace!(attr, "attribute absent on instance");
                continue;
            };
            if !include_null && !field.is_truthy() {
                continue;
            }

            let sub = children.get(attr).copied().unwrap_or_default();
            let value = match (field, descriptor.strategy_for(attr)) {
                (Field::List(items), _) => self.nested_list(&items, sub)?,
                (field, Some(strategy)) => strategy(&field),
                (Field::Object(child), None) => self.nested_object(child, sub)?,
                (Field::Scalar(value), None) => value
            };
            output.insert(attr.to_string(), value);
        }

        meta::attach_object(self.router, descriptor, object, output)
    }

    fn object(&self, node: &Node<'_>) -> Result<Value, Error> {
        match node.object.descriptor().custom_handler() {
            Some(handler) => handler.serialize(self, node),
            None => self.serialize_object_default(node)
        }
    }

    fn collection(
        &self,
        items: &[&dyn Describable],
        page: Option<&dyn Paginate>,
        directives: &Directives,
        overrides: Overrides
    ) -> Result<Value, Error> {
        let descriptor = items.first().map(|first| first.descriptor());
        if let Some(first) = items.first()
            && items.iter().any(|item| item.type_name() != first.type_name())
        {
            tracing::debug!(
                first = first.type_name(),
                "collection mixes member types, using the first member's settings"
            );
        }

        let expand = overrides
            .expand
            .unwrap_or_else(|| descriptor.is_none_or(Descriptor::expands));

        let mut output = Vec::with_capacity(items.len());
        for &member in items {
            let value = if expand {
                self.object(&Node::new(member, directives).with_overrides(overrides))?
            } else {
                let narrowed = Directives {
                    include: vec![member.descriptor().identifier().to_string()],
                    ..directives.clone()
                };
                self.object(&Node::new(member, &narrowed).with_overrides(overrides))?
            };
            output.push(value);
        }

        meta::attach_collection(self.router, descriptor, output, page)
    }

    fn nested_list(&self, items: &[&dyn Describable], sub: &[String]) -> Result<Value, Error> {
        let (include, expand) = classify(sub);
        let overrides = Overrides {
            expand:       (!include.is_empty()).then_some(true),
            include_null: None
        };
        let directives = Directives {
            include,
            exclude: Vec::new(),
            expand
        };
        self.collection(items, None, &directives, overrides)
    }

    fn nested_object(&self, child: &dyn Describable, sub: &[String]) -> Result<Value, Error> {
        let (mut include, expand) = classify(sub);
        if include.is_empty() {
            include.push(child.descriptor().identifier().to_string());
        }
        let directives = Directives {
            include,
            exclude: Vec::new(),
            expand
        };
        self.object(&Node::new(child, &directives))
    }
}
