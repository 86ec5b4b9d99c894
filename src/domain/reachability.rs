//! Reachability check contract.

use async_trait::async_trait;

/// Why a candidate URL was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReachabilityError {
    #[error("'{url}' is not a valid http(s) URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("url returned a non 200 status: {status}")]
    Status { url: String, status: u16 },

    #[error("request to '{url}' timed out")]
    Timeout { url: String },

    #[error("request to '{url}' failed: {reason}")]
    Transport { url: String, reason: String },
}

impl ReachabilityError {
    /// The URL that failed the check.
    pub fn url(&self) -> &str {
        match self {
            ReachabilityError::InvalidUrl { url, .. }
            | ReachabilityError::Status { url, .. }
            | ReachabilityError::Timeout { url }
            | ReachabilityError::Transport { url, .. } => url,
        }
    }
}

/// Live check confirming a URL currently answers `200 OK`.
///
/// Results are never cached; each call hits the network again.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlValidator: Send + Sync {
    async fn validate(&self, url: &str) -> Result<(), ReachabilityError>;
}
