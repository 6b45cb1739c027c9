//! Tests for loading route tables from disk.

use std::io::Write;

use oxide_pathtrie::{LookupMode, RouteTable, TrieConfig, TrieError};

const ROUTES: &str = r#"{
    "routes": [
        { "template": "/date/:year/:month/:day", "handler": "date" },
        { "template": "/seo/*", "handler": "seo" },
        { "template": "/api", "handler": "api" }
    ]
}"#;

#[test]
fn load_and_build() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ROUTES.as_bytes()).unwrap();

    let table = RouteTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 3);

    let trie = table.build(TrieConfig::default());
    let m = trie.lookup("/date/2012/12/25").unwrap();
    assert_eq!(m.handler(), "date");
    assert_eq!(m.variables().require("day").unwrap(), "25");
    assert!(trie.lookup("/api/v1").is_none());
}

#[test]
fn build_with_partial_mode() {
    let table = RouteTable::from_json_str(ROUTES).unwrap();
    let trie = table.build(TrieConfig::new().mode(LookupMode::AllowPartial));
    let m = trie.lookup("/api/v1/users").unwrap();
    assert_eq!(m.handler(), "api");
    assert_eq!(m.remainder(), ["v1", "users"]);
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RouteTable::load(dir.path().join("routes.json")).unwrap_err();
    assert!(matches!(err, TrieError::Io(_)));
}

#[test]
fn load_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"routes\": [").unwrap();
    let err = RouteTable::load(file.path()).unwrap_err();
    assert!(matches!(err, TrieError::Json(_)));
}

#[test]
fn table_round_trips_through_serde() {
    let table = RouteTable::new().route("/a", "a").route("/b/:x", "b");
    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(RouteTable::from_json_str(&json).unwrap(), table);
}
