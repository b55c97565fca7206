// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute selection for one object.
//!
//! # Rules
//!
//! | Step | Input | Effect |
//! |------|-------|--------|
//! | 1 | `*` in `include` | emit falsy values, drop the wildcard |
//! | 2 | `include` empty | start from every declared attribute |
//! | 2 | `include` given | start from the identifier only |
//! | 3 | `include` names | add the declared ones |
//! | 4 | `exclude` names | remove them, except the identifier |
//! | 5 | `expand` names | add the declared ones, even if excluded |
//!
//! Requested names are matched against declared names after snake-case
//! normalization. Anything not declared is dropped silently.

use std::collections::HashSet;

use crate::{Descriptor, expression::normalize};

/// The wildcard include token.
pub const WILDCARD: &str = "*";

/// Result of attribute selection for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selected attributes in declaration order.
    pub attributes: Vec<&'static str>,

    /// Whether the wildcard asked for falsy values.
    pub wildcard: bool
}

impl Selection {
    /// Whether `name` was selected.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.iter().any(|attr| *attr == name)
    }
}

/// Map a requested name onto a declared attribute.
///
/// Exact matches win; otherwise both sides are compared in snake case.
///
/// # Example
///
/// ```rust
/// use sieve_core::{Descriptor, resolve};
///
/// let descriptor = Descriptor::new("id").attribute("enum_value");
/// assert_eq!(resolve(&descriptor, "enumValue"), Some("enum_value"));
/// assert_eq!(resolve(&descriptor, "protected"), None);
/// ```
pub fn resolve(descriptor: &Descriptor, requested: &str) -> Option<&'static str> {
    let declared = descriptor.attribute_names();
    if let Some(name) = declared.iter().find(|name| **name == requested) {
        return Some(*name);
    }
    let wanted = normalize(requested);
    declared
        .iter()
        .find(|name| **name == wanted || normalize(name) == wanted)
        .copied()
}

/// Compute the attributes to emit for one object.
///
/// `expand_names` are the names seen in the `expand` directive; they force
/// inclusion.
///
/// # Example
///
/// ```rust
/// use sieve_core::{Descriptor, select};
///
/// let descriptor = Descriptor::new("id").attributes(["name", "owner"]);
///
/// let selection = select(&descriptor, &["owner"], &["name"], &["name"]);
/// assert_eq!(selection.attributes, vec!["id", "owner"]);
/// ```
pub fn select<E, I, X>(
    descriptor: &Descriptor,
    expand_names: &[E],
    include: &[I],
    exclude: &[X]
) -> Selection
where
    E: AsRef<str>,
    I: AsRef<str>,
    X: AsRef<str>
{
    let include: Vec<&str> = include.iter().map(|name| name.as_ref()).collect();
    let exclude: Vec<&str> = exclude.iter().map(|name| name.as_ref()).collect();
    let expand_names: Vec<&str> = expand_names.iter().map(|name| name.as_ref()).collect();

    let wildcard = include.contains(&WILDCARD);
    let requested: Vec<&str> = include.into_iter().filter(|name| *name != WILDCARD).collect();

    let identifier = descriptor.identifier();
    let mut selected: HashSet<&'static str> = if requested.is_empty() {
        descriptor.attribute_names().iter().copied().collect()
    } else {
        HashSet::from([identifier])
    };

    selected.extend(resolve_all(descriptor, &requested));

    for name in exclude {
        match resolve(descriptor, name) {
            Some(attr) if attr != identifier => {
                selected.remove(attr);
            }
            _ => {}
        }
    }

    selected.extend(resolve_all(descriptor, &expand_names));

    let attributes = descriptor
        .attribute_names()
        .iter()
        .copied()
        .filter(|attr| selected.contains(attr))
        .collect();

    Selection {
        attributes,
        wildcard
    }
}

fn resolve_all(descriptor: &Descriptor, names: &[&str]) -> Vec<&'static str> {
    names
        .iter()
        .filter_map(|name| {
            let resolved = resolve(descriptor, name);
            if resolved.is_none() {
                tracing::debug!(name = *name, "dropping undeclared attribute");
            }
            resolved
        })
        .collect()
}
