//! reqwest-backed reachability check.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::domain::reachability::{ReachabilityError, UrlValidator};

/// Validates URLs by issuing a `GET` and requiring exactly `200 OK`.
///
/// Redirects are followed; the final response decides. Anything other than
/// a timely `200` is [`ReachabilityError`].
#[derive(Clone)]
pub struct HttpUrlValidator {
    client: Client,
}

impl HttpUrlValidator {
    /// Builds a validator whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UrlValidator for HttpUrlValidator {
    async fn validate(&self, url: &str) -> Result<(), ReachabilityError> {
        let parsed = Url::parse(url).map_err(|e| ReachabilityError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ReachabilityError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let response = self.client.get(parsed).send().await.map_err(|e| {
            if e.is_timeout() {
                ReachabilityError::Timeout {
                    url: url.to_string(),
                }
            } else {
                ReachabilityError::Transport {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        debug!("Reachability check for {} returned {}", url, status);

        if status != StatusCode::OK {
            return Err(ReachabilityError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode as AxumStatus, response::Redirect, routing::get};
    use std::net::SocketAddr;

    async fn spawn_target() -> SocketAddr {
        let app = Router::new()
            .route("/ok", get(|| async { "fine" }))
            .route("/created", get(|| async { (AxumStatus::CREATED, "made") }))
            .route("/missing", get(|| async { AxumStatus::NOT_FOUND }))
            .route("/moved", get(|| async { Redirect::temporary("/ok") }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    "late"
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn validator() -> HttpUrlValidator {
        HttpUrlValidator::new(Duration::from_millis(500)).unwrap()
    }

    #[tokio::test]
    async fn test_ok_status_passes() {
        let addr = spawn_target().await;
        let result = validator().validate(&format!("http://{addr}/ok")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_non_200_success_status_is_rejected() {
        let addr = spawn_target().await;
        let result = validator().validate(&format!("http://{addr}/created")).await;
        assert!(matches!(
            result,
            Err(ReachabilityError::Status { status: 201, .. })
        ));
    }

    #[tokio::test]
    async fn test_not_found_is_rejected() {
        let addr = spawn_target().await;
        let result = validator().validate(&format!("http://{addr}/missing")).await;
        assert!(matches!(
            result,
            Err(ReachabilityError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_redirect_to_ok_passes() {
        let addr = spawn_target().await;
        let result = validator().validate(&format!("http://{addr}/moved")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_slow_target_times_out() {
        let addr = spawn_target().await;
        let result = validator().validate(&format!("http://{addr}/slow")).await;
        assert!(matches!(result, Err(ReachabilityError::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = validator().validate(&format!("http://{addr}/")).await;
        assert!(matches!(result, Err(ReachabilityError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_short_code_is_not_a_url() {
        let result = validator().validate("aHR0cHM6Ly").await;
        assert!(matches!(result, Err(ReachabilityError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_non_http_scheme_is_rejected() {
        let result = validator().validate("ftp://example.com/file").await;
        assert!(matches!(result, Err(ReachabilityError::InvalidUrl { .. })));
    }
}
