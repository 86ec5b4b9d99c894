//! # shortmap
//!
//! A small URL shortening service that keeps its whole state in one JSON file.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The mapping aggregate, store and validator traits
//! - **Application Layer** ([`application`]) - Create/resolve orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file store, HTTP reachability check
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Behavior
//!
//! - Short codes are the first 10 characters of the URL's base64 encoding.
//!   They are deterministic and may collide; a collision overwrites the older entry.
//! - A URL is only stored after it answers `200 OK` within the validation timeout.
//! - Resolution accepts either a stored code or any reachable URL, which is
//!   redirected to as-is.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run --bin admin -- store init
//! cargo run
//! curl -X POST localhost:8080/api/v1/new -d "https://www.wikipedia.org"
//! curl -i "localhost:8080/api/v1/url?url=aHR0cHM6Ly"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{Resolution, UrlService};
    pub use crate::domain::entities::{ShortCode, UrlMapping};
    pub use crate::domain::reachability::{ReachabilityError, UrlValidator};
    pub use crate::domain::repositories::{MappingRepository, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
