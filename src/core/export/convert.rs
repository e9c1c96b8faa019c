//! BSON to JSON-safe value conversion
//!
//! Converts fetched documents into serializable values: object identifiers
//! become their canonical hex string form, timestamps become ISO-8601
//! strings, mappings and sequences recurse structurally, and every other
//! scalar maps through the driver's relaxed extended-JSON rendering so that
//! numbers stay numbers and strings, booleans, and nulls pass through
//! unchanged. Conversion is total and deterministic; converting an
//! already-converted structure yields the same structure.

use crate::domain::{AuraError, Result};
use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// Convert a fetched document into a JSON-safe value
///
/// # Errors
///
/// Returns an error only for timestamps that cannot be rendered as an
/// ISO-8601 string (out-of-range dates).
pub fn convert_document(document: Document) -> Result<Value> {
    let mut map = Map::with_capacity(document.len());
    for (key, value) in document {
        map.insert(key, convert_bson(value)?);
    }
    Ok(Value::Object(map))
}

/// Convert a single BSON value, recursing into documents and arrays
pub fn convert_bson(value: Bson) -> Result<Value> {
    match value {
        Bson::Document(document) => convert_document(document),
        Bson::Array(items) => items
            .into_iter()
            .map(convert_bson)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Bson::ObjectId(oid) => Ok(Value::String(oid.to_hex())),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .map_err(|e| AuraError::Serialization(format!("Unrepresentable timestamp: {e}"))),
        other => Ok(other.into_relaxed_extjson()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use mongodb::bson::{doc, DateTime};
    use serde_json::json;

    #[test]
    fn test_json_native_values_pass_through() {
        let document = doc! {
            "title": "Dune",
            "pages": 412,
            "rating": 4.5,
            "premium": false,
            "subtitle": Bson::Null,
            "tags": ["sci-fi", "classic"],
            "meta": { "language": "en" },
        };

        let converted = convert_document(document).unwrap();

        assert_eq!(
            converted,
            json!({
                "title": "Dune",
                "pages": 412,
                "rating": 4.5,
                "premium": false,
                "subtitle": null,
                "tags": ["sci-fi", "classic"],
                "meta": { "language": "en" },
            })
        );
    }

    #[test]
    fn test_object_id_becomes_hex_string_in_place() {
        let oid = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        let document = doc! {
            "_id": oid,
            "nested": { "ref": oid },
            "refs": [oid],
        };

        let converted = convert_document(document).unwrap();

        assert_eq!(converted["_id"], json!("507f1f77bcf86cd799439011"));
        assert_eq!(converted["nested"]["ref"], json!("507f1f77bcf86cd799439011"));
        assert_eq!(converted["refs"][0], json!("507f1f77bcf86cd799439011"));
    }

    #[test]
    fn test_datetime_becomes_iso8601_string_in_place() {
        // 2023-11-14T22:13:20Z
        let dt = DateTime::from_millis(1_700_000_000_000);
        let document = doc! { "createdAt": dt, "audit": { "at": dt } };

        let converted = convert_document(document).unwrap();

        let rendered = converted["createdAt"].as_str().unwrap();
        assert!(rendered.starts_with("2023-11-14T22:13:20"));
        assert!(rendered.ends_with('Z'));
        assert_eq!(converted["audit"]["at"], converted["createdAt"]);
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let make = || {
            doc! {
                "_id": ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap(),
                "createdAt": DateTime::from_millis(1_700_000_000_000),
                "count": 3_i64,
            }
        };

        let first = convert_document(make()).unwrap();
        let second = convert_document(make()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let document = doc! {
            "_id": ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap(),
            "createdAt": DateTime::from_millis(1_700_000_000_000),
            "title": "Dune",
            "tags": ["sci-fi"],
            "downloads": 42,
        };

        let once = convert_document(document).unwrap();

        // Round the converted value back into a document: no identifier or
        // timestamp types remain, so a second pass must be a no-op.
        let reparsed = mongodb::bson::to_document(&once).unwrap();
        let twice = convert_document(reparsed).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_document() {
        let converted = convert_document(doc! {}).unwrap();
        assert_eq!(converted, json!({}));
    }
}
