//! Outbound reachability checks.

pub mod http_validator;

pub use http_validator::HttpUrlValidator;
