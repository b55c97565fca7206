// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hyperlink and pagination metadata.
//!
//! # Output Shapes
//!
//! ```text
//! object:     { ...attributes, "meta": { "href": "/models/1" } }
//! collection: { "items": [...], "meta": { "limit", "page", "total", "href" } }
//! ```

use serde_json::{Map, Value};

use crate::{Describable, Descriptor, Error, Paginate, Router};

/// Key under which metadata is attached.
pub const META: &str = "meta";

/// Key holding collection members.
pub const ITEMS: &str = "items";

/// Attach `meta.href` to a serialized object.
///
/// Left unchanged when the type has no route or hides metadata. The
/// identifier value comes from the output, falling back to the object
/// itself when it was suppressed.
pub(crate) fn attach_object(
    router: &dyn Router,
    descriptor: &Descriptor,
    object: &dyn Describable,
    mut output: Map<String, Value>
) -> Result<Value, Error> {
    let Some(route) = descriptor.route_name().filter(|_| descriptor.exposes_meta()) else {
        return Ok(Value::Object(output));
    };

    let identifier = descriptor.identifier();
    let id = match output.get(identifier) {
        Some(value) => value.clone(),
        None => object
            .field(identifier)
            .and_then(|field| field.into_scalar())
            .unwrap_or(Value::Null)
    };

    let href = router.assemble(route, &[(identifier, &id)])?;
    let mut meta = Map::new();
    meta.insert("href".into(), Value::String(href));
    output.insert(META.into(), Value::Object(meta));

    Ok(Value::Object(output))
}

/// Wrap serialized members with collection metadata.
///
/// `descriptor` is the one bound from the first member, if any.
pub(crate) fn attach_collection(
    router: &dyn Router,
    descriptor: Option<&Descriptor>,
    items: Vec<Value>,
    page: Option<&dyn Paginate>
) -> Result<Value, Error> {
    if !descriptor.is_none_or(Descriptor::exposes_meta) {
        return Ok(Value::Array(items));
    }

    let (limit, current, total, suffix) = match page {
        Some(page) => {
            let current = page.page();
            let suffix: String = page
                .pages()
                .filter(|marker| marker.id == current)
                .map(|marker| marker.to_string())
                .collect();
            (page.limit(), current, page.total(), suffix)
        }
        None => {
            let count = items.len() as u64;
            (count, 1, count, String::new())
        }
    };

    let mut meta = Map::new();
    meta.insert("limit".into(), limit.into());
    meta.insert("page".into(), current.into());
    meta.insert("total".into(), total.into());
    if let Some(route) = descriptor.and_then(Descriptor::route_name) {
        let href = router.assemble(route, &[])?;
        meta.insert("href".into(), Value::String(href + &suffix));
    }

    let mut output = Map::new();
    output.insert(ITEMS.into(), Value::Array(items));
    output.insert(META.into(), Value::Object(meta));

    Ok(Value::Object(output))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{Field, PageMarker, RouteTable};

    struct Doc {
        id: Option<u32>
    }

    static DOC: std::sync::LazyLock<Descriptor> =
        std::sync::LazyLock::new(|| Descriptor::new("id").route("docs"));

    impl Describable for Doc {
        fn descriptor(&self) -> &Descriptor {
            &DOC
        }

        fn field(&self, name: &str) -> Option<Field<'_>> {
            (name == "id").then(|| Field::scalar(&self.id))
        }
    }

    struct FixedPage;

    impl Paginate for FixedPage {
        fn limit(&self) -> u64 {
            10
        }

        fn total(&self) -> u64 {
            1
        }

        fn page(&self) -> u64 {
            1
        }

        fn items(&self) -> Vec<&dyn Describable> {
            Vec::new()
        }

        fn pages(&self) -> Box<dyn Iterator<Item = PageMarker> + '_> {
            Box::new([PageMarker { id: 1 }].into_iter())
        }
    }

    fn routes() -> RouteTable {
        RouteTable::new().route("docs", "/docs[/:id]")
    }

    #[test]
    fn object_gets_href() {
        let doc = Doc {
            id: Some(4)
        };
        let mut output = Map::new();
        output.insert("id".into(), json!(4));
        let value = attach_object(&routes(), &DOC, &doc, output).unwrap();
        assert_eq!(value, json!({"id": 4, "meta": {"href": "/docs/4"}}));
    }

    #[test]
    fn suppressed_identifier_falls_back_to_object() {
        let doc = Doc {
            id: Some(9)
        };
        let value = attach_object(&routes(), &DOC, &doc, Map::new()).unwrap();
        assert_eq!(value, json!({"meta": {"href": "/docs/9"}}));
    }

    #[test]
    fn null_identifier_collapses_optional_segment() {
        let doc = Doc {
            id: None
        };
        let value = attach_object(&routes(), &DOC, &doc, Map::new()).unwrap();
        assert_eq!(value, json!({"meta": {"href": "/docs"}}));
    }

    #[test]
    fn hidden_meta_leaves_object_alone() {
        let descriptor = Descriptor::new("id").route("docs").expose_meta(false);
        let doc = Doc {
            id: Some(1)
        };
        let value = attach_object(&routes(), &descriptor, &doc, Map::new()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn plain_collection_counts_items() {
        let value = attach_collection(&routes(), Some(&DOC), vec![json!({"id": 1}), json!({"id": 2})], None).unwrap();
        assert_eq!(
            value,
            json!({
                "items": [{"id": 1}, {"id": 2}],
                "meta": {"limit": 2, "page": 1, "total": 2, "href": "/docs"}
            })
        );
    }

    #[test]
    fn paginated_collection_uses_page_marker() {
        let value = attach_collection(&routes(), Some(&DOC), Vec::new(), Some(&FixedPage)).unwrap();
        assert_eq!(
            value,
            json!({
                "items": [],
                "meta": {"limit": 10, "page": 1, "total": 1, "href": "/docs?page=1"}
            })
        );
    }

    #[test]
    fn hidden_meta_returns_bare_list() {
        let descriptor = Descriptor::new("id").expose_meta(false);
        let value = attach_collection(&routes(), Some(&descriptor), vec![json!(1)], None).unwrap();
        assert_eq!(value, json!([1]));
    }

    #[test]
    fn empty_collection_without_descriptor() {
        let value = attach_collection(&routes(), None, Vec::new(), None).unwrap();
        assert_eq!(value, json!({"items": [], "meta": {"limit": 0, "page": 1, "total": 0}}));
    }
}
