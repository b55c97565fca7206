// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute expression parsing.
//!
//! Directives arrive as comma-separated expressions in which parentheses
//! nest sub-selections:
//!
//! ```text
//! expand=author(name,avatar),tags,comments(author(name))
//! ```
//!
//! # Grammar
//!
//! ```text
//! list  := token ("," token)*
//! token := name | name "(" list ")"
//! ```
//!
//! Nothing here fails. Unbalanced parentheses are passed through verbatim
//! and a token that is not exactly `name(...)` is a bare name.

use std::collections::HashMap;

use convert_case::{Case, Casing};

/// Split `expr` on commas that are not inside parentheses.
///
/// Tokens are trimmed and empty tokens are dropped.
///
/// # Example
///
/// ```rust
/// use sieve_core::split_top_level;
///
/// assert_eq!(
///     split_top_level("a(b),c,d(e,f(g),h)"),
///     vec!["a(b)", "c", "d(e,f(g),h)"]
/// );
/// assert!(split_top_level("").is_empty());
/// ```
pub fn split_top_level(expr: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, ch) in expr.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                push_token(&mut tokens, &expr[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    push_token(&mut tokens, &expr[start..]);

    tokens
}

fn push_token(tokens: &mut Vec<String>, raw: &str) {
    let token = raw.trim();
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
}

/// Parsed `expand` directive: attribute name to optional sub-expression.
///
/// `None` means "expand fully, no refinement".
pub type Expansions = HashMap<String, Option<Vec<String>>>;

/// Decompose `expand` tokens into names and sub-expressions.
///
/// `name(sub)` maps the snake-cased `name` to `sub` split by
/// [`split_top_level`]. Any other token maps to `None` under its own text.
/// A name given twice keeps its last token.
///
/// # Example
///
/// ```rust
/// use sieve_core::parse_expand;
///
/// let tokens = vec!["authorName(id,email)".to_string(), "tags".to_string()];
/// let expansions = parse_expand(&tokens);
///
/// assert_eq!(
///     expansions.get("author_name"),
///     Some(&Some(vec!["id".to_string(), "email".to_string()]))
/// );
/// assert_eq!(expansions.get("tags"), Some(&None));
/// ```
pub fn parse_expand<S>(tokens: &[S]) -> Expansions
where
    S: AsRef<str>
{
    expand_entries(tokens).into_iter().collect()
}

/// Decompose `expand` tokens like [`parse_expand`], keeping token order.
///
/// Names are not deduplicated; when two tokens target the same attribute
/// the later one wins.
///
/// # Example
///
/// ```rust
/// use sieve_core::expand_entries;
///
/// let entries = expand_entries(&["owner(id)", "owner"]);
/// assert_eq!(
///     entries,
///     vec![("owner".to_string(), Some(vec!["id".to_string()])), ("owner".to_string(), None)]
/// );
/// ```
pub fn expand_entries<S>(tokens: &[S]) -> Vec<(String, Option<Vec<String>>)>
where
    S: AsRef<str>
{
    let mut entries = Vec::with_capacity(tokens.len());

    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        match split_call(token) {
            Some((name, inner)) => entries.push((normalize(name), Some(split_top_level(inner)))),
            None => {
                if token.contains('(') || token.contains(')') {
                    tracing::debug!(token, "malformed expand token, treating as bare name");
                }
                entries.push((token.to_string(), None));
            }
        }
    }

    entries
}

/// Split a token of the form `name(inner)`.
///
/// `name` must be non-empty and made of word characters, and the token must
/// end with the parenthesis closing the first one.
fn split_call(token: &str) -> Option<(&str, &str)> {
    let open = token.find('(')?;
    let inner = token[open + 1..].strip_suffix(')')?;
    let name = &token[..open];

    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    if name.is_empty() || !name.chars().all(is_word) {
        return None;
    }
    if !balanced(inner) {
        return None;
    }

    Some((name, inner))
}

fn balanced(expr: &str) -> bool {
    let mut depth = 0usize;
    for ch in expr.chars() {
        match ch {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(next) => depth = next,
                None => return false
            },
            _ => {}
        }
    }
    depth == 0
}

/// Separate sub-expression tokens into child `include` and child `expand`.
///
/// Tokens containing `(` are expansions; everything else is an include.
///
/// # Example
///
/// ```rust
/// use sieve_core::classify;
///
/// let tokens = vec!["id".to_string(), "owner(name)".to_string()];
/// let (include, expand) = classify(&tokens);
/// assert_eq!(include, vec!["id"]);
/// assert_eq!(expand, vec!["owner(name)"]);
/// ```
pub fn classify(tokens: &[String]) -> (Vec<String>, Vec<String>) {
    tokens.iter().cloned().partition(|token| !token.contains('('))
}

/// Normalize a requested name to snake case.
///
/// # Example
///
/// ```rust
/// use sieve_core::normalize;
///
/// assert_eq!(normalize("enumValue"), "enum_value");
/// assert_eq!(normalize("enum_value"), "enum_value");
/// ```
pub fn normalize(name: &str) -> String {
    name.to_case(Case::Snake)
}
