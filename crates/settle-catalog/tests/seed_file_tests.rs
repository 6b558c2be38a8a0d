//! Seed-file loading against real files.

use settle_catalog::{CatalogError, ErrorCatalog, Tier};
use std::io::Write;

const SEED: &str = r#"
[[generic]]
code = 404
domain = "generic"
key = "not_found"
message = "The requested resource could not be found"

[[application]]
code = 600
domain = "application"
key = "no_data"
message = "No data returned by the settled operation"

[[domain]]
code = 700
domain = "request_executor"
key = "undefined_request"
message = "Undefined request passed to the executor"
"#;

#[test]
fn load_seed_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SEED.as_bytes()).unwrap();

    let catalog = ErrorCatalog::from_seed_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.tier_len(Tier::Domain), 1);

    let record = catalog.lookup("undefined_request").unwrap();
    assert_eq!(record.domain, "request_executor");
    assert_eq!(record.code.as_num(), Some(700));
}

#[test]
fn missing_seed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    let err = ErrorCatalog::from_seed_file(&path).unwrap_err();
    assert!(matches!(err, CatalogError::FileNotFound { .. }));
    assert!(err.to_string().contains("does-not-exist.toml"));
}

#[test]
fn malformed_seed_file_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[[generic]]\nkey = 12 = 13").unwrap();
    let err = ErrorCatalog::from_seed_file(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[test]
fn loaded_records_extend_a_standard_catalog() {
    let mut catalog = ErrorCatalog::standard();
    let loaded = ErrorCatalog::from_toml_str(SEED).unwrap();
    catalog.add(loaded.lookup("undefined_request").cloned());
    assert_eq!(catalog.lookup("undefined_request").unwrap().code.as_num(), Some(700));
}
