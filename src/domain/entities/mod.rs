//! Core domain entities.
//!
//! - [`UrlMapping`] - the persisted code → URL aggregate
//! - [`ShortCode`] - a derived code, constructed only by the encoder

pub mod url_mapping;

pub use url_mapping::{ShortCode, UrlMapping};
