//! HTTP server initialization and runtime setup.
//!
//! Wires the mapping store and reachability validator into the service,
//! then runs the Axum server until Ctrl+C.

use crate::application::services::UrlService;
use crate::config::Config;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::persistence::FileMappingRepository;
use crate::infrastructure::reachability::HttpUrlValidator;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// A missing or malformed mapping file does not stop startup; it is
/// reported here and surfaces as `500` on requests that touch storage
/// until the file is fixed.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(FileMappingRepository::new(&config.mapping_file));

    match repository.health().await {
        Ok(count) => tracing::info!(
            "Mapping file {} loaded ({} entries)",
            config.mapping_file.display(),
            count
        ),
        Err(e) => tracing::warn!("Mapping store not usable yet: {}", e),
    }

    let validator = Arc::new(
        HttpUrlValidator::new(config.validation_timeout())
            .context("Failed to build reachability HTTP client")?,
    );

    let url_service = Arc::new(UrlService::new(repository, validator));
    let state = AppState::new(url_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
