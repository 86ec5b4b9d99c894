//! DTOs for the shortening and resolution endpoints.

use serde::Serialize;

/// Result of a successful shortening request.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub long_url: String,
}

/// Query string of the resolution endpoint.
///
/// `url` carries either a previously issued short code or a full URL.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ResolveParams {
    pub url: Option<String>,
}

impl ResolveParams {
    /// Picks the parameters out of decoded query pairs.
    ///
    /// A repeated `url` keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let url = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "url").then_some(value));

        Self { url }
    }
}
