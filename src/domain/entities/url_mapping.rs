//! The persisted code→URL aggregate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A derived short code standing in for a longer URL.
///
/// Only [`crate::utils::encoder::encode`] creates codes, so every code held
/// by a [`UrlMapping`] was derived from the URL it points to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    pub(crate) fn from_encoded(encoded: String) -> Self {
        Self(encoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The complete set of short code → original URL associations.
///
/// Serialized as `{"urlMap": {"<code>": "<url>"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    #[serde(rename = "urlMap", default)]
    mapping: HashMap<String, String>,
}

impl UrlMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the URL stored for `code`.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.mapping.get(code).map(String::as_str)
    }

    /// Stores `url` under `code`, returning the URL it replaced, if any.
    pub fn insert(&mut self, code: &ShortCode, url: impl Into<String>) -> Option<String> {
        self.mapping.insert(code.as_str().to_string(), url.into())
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Iterates over `(code, url)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mapping.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
