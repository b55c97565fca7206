// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Caller-supplied field selection.
//!
//! Three query parameters drive the output shape:
//!
//! ```text
//! GET /models?include=id,name
//! GET /models?include=*
//! GET /models?exclude=name
//! GET /models?expand=related
//! GET /models?expand=related(name)
//! ```

use crate::expression::split_top_level;

/// Query key for the include directive.
pub const INCLUDE: &str = "include";

/// Query key for the exclude directive.
pub const EXCLUDE: &str = "exclude";

/// Query key for the expand directive.
pub const EXPAND: &str = "expand";

/// The `include`, `exclude` and `expand` directives for one call.
///
/// # Example
///
/// ```rust
/// use sieve_core::Directives;
///
/// let directives = Directives::from_pairs([
///     ("include", "id,name"),
///     ("expand", "owner(id,email),tags"),
///     ("page", "2")
/// ]);
///
/// assert_eq!(directives.include, vec!["id", "name"]);
/// assert_eq!(directives.expand, vec!["owner(id,email)", "tags"]);
/// assert!(directives.exclude.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    /// Attributes to include; empty means all declared attributes.
    pub include: Vec<String>,

    /// Attributes to leave out. The identifier is never removed.
    pub exclude: Vec<String>,

    /// Attributes to expand, optionally with a sub-expression.
    pub expand: Vec<String>
}

impl Directives {
    /// No directives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build directives from decoded query pairs.
    ///
    /// Keys other than `include`, `exclude` and `expand` are ignored. A
    /// repeated key appends to the earlier values.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>
    {
        let mut directives = Self::default();
        for (key, value) in pairs {
            let target = match key.as_ref() {
                INCLUDE => &mut directives.include,
                EXCLUDE => &mut directives.exclude,
                EXPAND => &mut directives.expand,
                _ => continue
            };
            target.extend(split_top_level(value.as_ref()));
        }
        directives
    }

    /// Set `include`.
    #[must_use]
    pub fn include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.include = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set `exclude`.
    #[must_use]
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.exclude = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set `expand`.
    #[must_use]
    pub fn expand<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.expand = names.into_iter().map(Into::into).collect();
        self
    }

    /// Whether no directive is set.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty() && self.expand.is_empty()
    }
}
