use super::common;

use common::test_server::TestServer;
use schemock::config::FetchSettings;
use schemock::{DocumentLoader, SchemockError};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn settings(retry_max_elapsed_seconds: u64) -> FetchSettings {
    FetchSettings {
        timeout_seconds: 5,
        retry_max_elapsed_seconds,
        ..FetchSettings::default()
    }
}

#[tokio::test]
async fn test_fetch_yaml_document() {
    let server = TestServer::new().await;
    let loader = DocumentLoader::new(&settings(5)).unwrap();

    let document = loader.load(&server.url("/petstore.yaml")).await.unwrap();
    assert_eq!(document["swagger"], json!("2.0"));
    assert_eq!(document["info"]["title"], json!("Swagger Petstore"));
    assert!(document["paths"]["/pets"]["get"]["responses"]["200"].is_object());
}

#[tokio::test]
async fn test_fetch_json_document() {
    let server = TestServer::new().await;
    let loader = DocumentLoader::new(&settings(5)).unwrap();

    let document = loader.load(&server.url("/users.json")).await.unwrap();
    assert_eq!(document["openapi"], json!("3.0.3"));
}

#[tokio::test]
async fn test_not_found_fails_without_retry() {
    let server = TestServer::new().await;
    let loader = DocumentLoader::new(&settings(30)).unwrap();

    let err = loader.load(&server.url("/missing.json")).await.unwrap_err();
    assert!(matches!(err, SchemockError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_server_error_gives_up() {
    let server = TestServer::new().await;
    let loader = DocumentLoader::new(&settings(0)).unwrap();

    let err = loader.load(&server.url("/broken")).await.unwrap_err();
    assert!(matches!(err, SchemockError::Status { status: 500, .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_transient_failure_is_retried() {
    let server = TestServer::new().await;
    let loader = DocumentLoader::new(&settings(10)).unwrap();

    let document = loader.load(&server.url("/flaky.yaml")).await.unwrap();
    assert_eq!(document["swagger"], json!("2.0"));
    assert_eq!(server.flaky_calls(), 2);
}

#[tokio::test]
async fn test_load_local_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("petstore.yaml");
    fs::write(&path, common::test_server::PETSTORE_YAML).unwrap();

    let loader = DocumentLoader::new(&settings(0)).unwrap();
    let document = loader.load(path.to_str().unwrap()).await.unwrap();
    assert_eq!(document["definitions"]["Pet"]["type"], json!("object"));
}
