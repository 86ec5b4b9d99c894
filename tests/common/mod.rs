#![allow(dead_code)]

use axum::{Router, http::StatusCode, routing::get};
use shortmap::application::services::UrlService;
use shortmap::domain::entities::UrlMapping;
use shortmap::domain::repositories::MappingRepository;
use shortmap::infrastructure::persistence::FileMappingRepository;
use shortmap::infrastructure::reachability::HttpUrlValidator;
use shortmap::state::AppState;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Creates an existing, empty mapping file.
pub fn empty_mapping_file() -> NamedTempFile {
    NamedTempFile::new().unwrap()
}

/// Creates a mapping file with the given raw content.
pub fn mapping_file_with(content: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), content).unwrap();
    file
}

pub fn create_test_state(mapping_file: &Path) -> AppState {
    let repository = Arc::new(FileMappingRepository::new(mapping_file));
    let validator = Arc::new(HttpUrlValidator::new(Duration::from_millis(500)).unwrap());

    AppState::new(Arc::new(UrlService::new(repository, validator)))
}

pub async fn read_mapping(mapping_file: &Path) -> UrlMapping {
    FileMappingRepository::new(mapping_file)
        .load()
        .await
        .unwrap()
}

/// Starts a local HTTP server standing in for the sites users link to.
///
/// - `/ok`, `/other` - `200 OK`
/// - `/missing` - `404 Not Found`
/// - `/slow` - answers after 3 seconds
pub async fn spawn_target() -> SocketAddr {
    let app = Router::new()
        .route("/ok", get(|| async { "ok" }))
        .route("/other", get(|| async { "other" }))
        .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                "slow"
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
