//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and give HTTP handlers a small API.
//!
//! - [`services::url_service::UrlService`] - short link creation and resolution

pub mod services;
