//! Integration tests for the export pipeline
//!
//! Runs real BSON documents through conversion and file writing, then reads
//! the file back the way a downstream consumer would.

use auractl::config::{
    secret_string, ApiConfig, ApplicationConfig, AuraConfig, ExportConfig, LoggingConfig,
    MongoConfig,
};
use auractl::core::export::{convert_document, run_export, write_export_file};
use auractl::domain::AuraError;
use mongodb::bson::{doc, oid::ObjectId, Bson, DateTime};
use serde_json::Value;
use tempfile::tempdir;

fn sample_book(id: &str, title: &str) -> mongodb::bson::Document {
    let oid = ObjectId::parse_str(id).unwrap();
    doc! {
        "_id": oid,
        "title": title,
        "pageSize": 320,
        "isPremium": false,
        "tags": ["fiction", "classic"],
        "createdAt": DateTime::from_millis(1_700_000_000_000),
        "uploader": {
            "_id": ObjectId::parse_str("507f191e810c19729de860ea").unwrap(),
            "name": "admin",
        },
    }
}

#[test]
fn test_export_file_round_trips_through_serde_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");

    let docs = vec![
        sample_book("507f1f77bcf86cd799439011", "Dune"),
        sample_book("507f1f77bcf86cd799439012", "Café du Livre — 書店"),
    ];
    let values: Vec<Value> = docs
        .into_iter()
        .map(|d| convert_document(d).unwrap())
        .collect();

    write_export_file(&path, &values).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: Value = serde_json::from_str(&raw).unwrap();
    let books = parsed.as_array().unwrap();
    assert_eq!(books.len(), 2);

    // Object ids come out as plain hex strings in their original position.
    assert_eq!(books[0]["_id"], "507f1f77bcf86cd799439011");
    assert_eq!(books[0]["uploader"]["_id"], "507f191e810c19729de860ea");

    // Timestamps come out as ISO-8601 strings.
    let created = books[0]["createdAt"].as_str().unwrap();
    assert!(created.starts_with("2023-11-14T22:13:20"));
    assert!(created.ends_with('Z'));

    // Scalars and arrays pass through untouched.
    assert_eq!(books[0]["pageSize"], 320);
    assert_eq!(books[0]["isPremium"], false);
    assert_eq!(books[0]["tags"], serde_json::json!(["fiction", "classic"]));

    // Non-ASCII text is written unescaped.
    assert!(raw.contains("Café du Livre — 書店"));
}

#[test]
fn test_export_is_deterministic() {
    let dir = tempdir().unwrap();
    let path_a = dir.path().join("a.json");
    let path_b = dir.path().join("b.json");

    let values: Vec<Value> = vec![sample_book("507f1f77bcf86cd799439011", "Dune")]
        .into_iter()
        .map(|d| convert_document(d).unwrap())
        .collect();

    write_export_file(&path_a, &values).unwrap();
    write_export_file(&path_b, &values).unwrap();

    let a = std::fs::read_to_string(&path_a).unwrap();
    let b = std::fs::read_to_string(&path_b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_collection_writes_empty_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");

    write_export_file(&path, &[]).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw, "[]");
}

#[tokio::test]
async fn test_unreachable_server_fails_before_writing_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("books.json");

    // Unroutable port: the ping fails within the selection timeout.
    let config = AuraConfig {
        application: ApplicationConfig::default(),
        mongodb: MongoConfig {
            uri: secret_string("mongodb://127.0.0.1:1".to_string()),
            database: "ebookaura".to_string(),
            collection: "books".to_string(),
            connect_timeout_secs: 1,
        },
        export: ExportConfig {
            output_file: output.to_str().unwrap().to_string(),
        },
        api: ApiConfig {
            base_url: "https://ebookaura.onrender.com".to_string(),
            path_prefix: "/api".to_string(),
            request_timeout_secs: 30,
        },
        logging: LoggingConfig::default(),
    };

    let result = run_export(&config).await;

    assert!(matches!(result, Err(AuraError::Database(_))));
    // A failed handshake must leave no output file behind.
    assert!(!output.exists());
}

#[test]
fn test_conversion_rejects_unrepresentable_timestamp() {
    // DateTime::MAX has no RFC 3339 rendering.
    let result = convert_document(doc! { "createdAt": DateTime::MAX });
    assert!(result.is_err());
}

#[test]
fn test_nested_documents_converted_recursively() {
    let document = doc! {
        "meta": {
            "history": [
                { "at": DateTime::from_millis(0), "by": ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap() },
            ],
        },
    };

    let value = convert_document(document).unwrap();
    let entry = &value["meta"]["history"][0];
    assert_eq!(entry["at"], "1970-01-01T00:00:00Z");
    assert_eq!(entry["by"], "507f1f77bcf86cd799439011");
}

#[test]
fn test_null_and_numeric_scalars_pass_through() {
    let document = doc! {
        "summary": Bson::Null,
        "rating": 4.5,
        "downloads": 1024_i64,
    };

    let value = convert_document(document).unwrap();
    assert_eq!(value["summary"], Value::Null);
    assert_eq!(value["rating"], 4.5);
    assert_eq!(value["downloads"], 1024);
}
