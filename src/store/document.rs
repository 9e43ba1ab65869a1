//! # Documents and Filters
//!
//! Documents are schema-less JSON objects. Filters and patches share the
//! same shape and are passed through to the backend untouched.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A schema-less record
pub type Document = Map<String, Value>;

/// A query predicate, interpreted by the backend
pub type Filter = Document;

/// Body of an update request: which document to touch and which fields to set
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSpec {
    pub filter: Filter,
    pub update: Document,
}

/// Check whether a document satisfies an equality filter
///
/// Every filter key must be present in the document with an equal value.
/// Dotted keys walk into nested objects. An empty filter matches everything.
pub fn matches_filter(doc: &Document, filter: &Filter) -> bool {
    filter
        .iter()
        .all(|(path, expected)| lookup_path(doc, path) == Some(expected))
}

/// Resolve a dotted field path against a document
pub fn lookup_path<'a>(doc: &'a Document, path: &str) -> Option<&'a Value> {
    if let Some(value) = doc.get(path) {
        return Some(value);
    }

    let mut segments = path.split('.');
    let mut current = doc.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Overwrite top-level fields of `doc` with the fields of `patch`
pub fn apply_patch(doc: &mut Document, patch: &Document) {
    for (key, value) in patch {
        doc.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(matches_filter(&doc(json!({"name": "X"})), &Filter::new()));
        assert!(matches_filter(&Document::new(), &Filter::new()));
    }

    #[test]
    fn test_equality_on_every_key() {
        let d = doc(json!({"name": "X", "price": 9}));
        assert!(matches_filter(&d, &doc(json!({"name": "X"}))));
        assert!(matches_filter(&d, &doc(json!({"name": "X", "price": 9}))));
        assert!(!matches_filter(&d, &doc(json!({"name": "X", "price": 10}))));
        assert!(!matches_filter(&d, &doc(json!({"missing": null}))));
    }

    #[test]
    fn test_dotted_path_reaches_nested_fields() {
        let d = doc(json!({"meta": {"tags": {"primary": "whey"}}}));
        assert!(matches_filter(&d, &doc(json!({"meta.tags.primary": "whey"}))));
        assert!(!matches_filter(&d, &doc(json!({"meta.tags.secondary": "whey"}))));
    }

    #[test]
    fn test_patch_leaves_other_fields() {
        let mut d = doc(json!({"name": "X", "price": 9}));
        apply_patch(&mut d, &doc(json!({"price": 12, "stock": 3})));
        assert_eq!(Value::Object(d), json!({"name": "X", "price": 12, "stock": 3}));
    }

    #[test]
    fn test_update_spec_requires_both_members() {
        let ok: Result<UpdateSpec, _> =
            serde_json::from_str(r#"{"filter":{"name":"X"},"update":{"price":12}}"#);
        assert!(ok.is_ok());

        let missing: Result<UpdateSpec, _> = serde_json::from_str(r#"{"filter":{}}"#);
        assert!(missing.is_err());

        let wrong_type: Result<UpdateSpec, _> =
            serde_json::from_str(r#"{"filter":[],"update":{}}"#);
        assert!(wrong_type.is_err());
    }
}
