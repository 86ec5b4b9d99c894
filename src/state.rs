//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::infrastructure::persistence::FileMappingRepository;
use crate::infrastructure::reachability::HttpUrlValidator;

/// The production service wiring: JSON file store and HTTP reachability check.
pub type DefaultUrlService = UrlService<FileMappingRepository, HttpUrlValidator>;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<DefaultUrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<DefaultUrlService>) -> Self {
        Self { url_service }
    }
}
