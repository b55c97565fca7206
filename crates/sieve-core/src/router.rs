// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hyperlink assembly.
//!
//! The engine only needs one thing from a URL router: turn a route name and
//! parameters into a path. [`RouteTable`] is a small in-memory router for
//! applications that do not bring their own.
//!
//! # Template Syntax
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `/models` | Literal text |
//! | `:id` | Required parameter |
//! | `[/:id]` | Optional group, kept only if all its parameters have values |

use std::collections::HashMap;

use serde_json::Value;

use crate::Error;

/// URL assembly capability.
pub trait Router {
    /// Build the path for `route` with `params`.
    ///
    /// # Errors
    ///
    /// Unknown route names and missing required parameters.
    fn assemble(&self, route: &str, params: &[(&str, &Value)]) -> Result<String, Error>;
}

impl<R> Router for &R
where
    R: Router + ?Sized
{
    fn assemble(&self, route: &str, params: &[(&str, &Value)]) -> Result<String, Error> {
        (**self).assemble(route, params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    Optional(Vec<Segment>)
}

/// Named routes with path templates.
///
/// # Example
///
/// ```rust
/// use sieve_core::{RouteTable, Router};
/// use serde_json::json;
///
/// let routes = RouteTable::new().route("models", "/models[/:id]");
///
/// assert_eq!(routes.assemble("models", &[]).unwrap(), "/models");
/// assert_eq!(routes.assemble("models", &[("id", &json!(1))]).unwrap(), "/models/1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Vec<Segment>>
}

impl RouteTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `template` under `name`.
    #[must_use]
    pub fn route(mut self, name: impl Into<String>, template: &str) -> Self {
        self.routes.insert(name.into(), parse_template(template));
        self
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }
}

impl Router for RouteTable {
    fn assemble(&self, route: &str, params: &[(&str, &Value)]) -> Result<String, Error> {
        let segments = self.routes.get(route).ok_or_else(|| Error::UnknownRoute {
            route: route.to_string()
        })?;

        let lookup = |name: &str| {
            params
                .iter()
                .find(|(key, value)| *key == name && !value.is_null())
                .map(|(_, value)| render(value))
        };

        let mut path = String::new();
        for segment in segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param(name) => match lookup(name) {
                    Some(value) => path.push_str(&value),
                    None => {
                        return Err(Error::MissingParameter {
                            route: route.to_string(),
                            param: name.clone()
                        });
                    }
                },
                Segment::Optional(inner) => {
                    if let Some(text) = render_optional(inner, &lookup) {
                        path.push_str(&text);
                    }
                }
            }
        }

        Ok(path)
    }
}

fn render_optional(segments: &[Segment], lookup: &dyn Fn(&str) -> Option<String>) -> Option<String> {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Param(name) => out.push_str(&lookup(name)?),
            Segment::Optional(inner) => {
                if let Some(text) = render_optional(inner, lookup) {
                    out.push_str(&text);
                }
            }
        }
    }
    Some(out)
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string()
    }
}

fn parse_template(template: &str) -> Vec<Segment> {
    let mut chars = template.chars().peekable();
    parse_segments(&mut chars)
}

fn parse_segments(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();

    while let Some(ch) = chars.next() {
        match ch {
            '[' => {
                flush(&mut segments, &mut literal);
                segments.push(Segment::Optional(parse_segments(chars)));
            }
            ']' => break,
            ':' => {
                flush(&mut segments, &mut literal);
                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() || next == '_' {
                        name.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                segments.push(Segment::Param(name));
            }
            _ => literal.push(ch)
        }
    }
    flush(&mut segments, &mut literal);

    segments
}

fn flush(segments: &mut Vec<Segment>, literal: &mut String) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn routes() -> RouteTable {
        RouteTable::new()
            .route("models", "/models[/:id]")
            .route("submodels", "/submodels[/:id]")
            .route("nested", "/models/:model_id/items[/:id[/:part]]")
    }

    #[test]
    fn parses_templates() {
        assert_eq!(
            parse_template("/models[/:id]"),
            vec![
                Segment::Literal("/models".into()),
                Segment::Optional(vec![
                    Segment::Literal("/".into()),
                    Segment::Param("id".into())
                ])
            ]
        );
    }

    #[test]
    fn optional_group_collapses_without_params() {
        assert_eq!(routes().assemble("models", &[]).unwrap(), "/models");
    }

    #[test]
    fn optional_group_renders_with_params() {
        let id = json!(1);
        assert_eq!(routes().assemble("models", &[("id", &id)]).unwrap(), "/models/1");
        let id = json!("abc");
        assert_eq!(routes().assemble("submodels", &[("id", &id)]).unwrap(), "/submodels/abc");
    }

    #[test]
    fn null_params_count_as_absent() {
        let id = Value::Null;
        assert_eq!(routes().assemble("models", &[("id", &id)]).unwrap(), "/models");
    }

    #[test]
    fn nested_optional_groups() {
        let (model, id, part) = (json!(3), json!(4), json!("x"));
        let table = routes();
        assert_eq!(
            table.assemble("nested", &[("model_id", &model)]).unwrap(),
            "/models/3/items"
        );
        assert_eq!(
            table.assemble("nested", &[("model_id", &model), ("id", &id)]).unwrap(),
            "/models/3/items/4"
        );
        assert_eq!(
            table
                .assemble("nested", &[("model_id", &model), ("id", &id), ("part", &part)])
                .unwrap(),
            "/models/3/items/4/x"
        );
    }

    #[test]
    fn missing_required_param() {
        let err = routes().assemble("nested", &[]).unwrap_err();
        assert!(matches!(err, Error::MissingParameter { ref param, .. } if param == "model_id"));
    }

    #[test]
    fn unknown_route() {
        let err = routes().assemble("ghost", &[]).unwrap_err();
        assert!(matches!(err, Error::UnknownRoute { ref route } if route == "ghost"));
    }

    #[test]
    fn extra_params_are_ignored() {
        let id = json!(1);
        assert_eq!(routes().assemble("models", &[("other", &id)]).unwrap(), "/models");
    }
}
