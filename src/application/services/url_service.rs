//! Short link creation and resolution service.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::entities::ShortCode;
use crate::domain::reachability::UrlValidator;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::encoder::encode;

/// How a resolution key was turned into a redirect target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The key was a stored short code.
    Stored(String),
    /// The key was not stored but is itself a reachable URL.
    Passthrough(String),
}

impl Resolution {
    /// The URL to redirect to.
    pub fn into_target(self) -> String {
        match self {
            Resolution::Stored(url) | Resolution::Passthrough(url) => url,
        }
    }
}

/// Orchestrates validation, encoding and persistence of short links.
///
/// Creation is serialized through an internal lock so concurrent callers
/// cannot lose each other's entries between load and save. Resolution only
/// reads and never takes the lock.
pub struct UrlService<R: MappingRepository, V: UrlValidator> {
    repository: Arc<R>,
    validator: Arc<V>,
    write_lock: Mutex<()>,
}

impl<R: MappingRepository, V: UrlValidator> UrlService<R, V> {
    /// Creates a new service.
    pub fn new(repository: Arc<R>, validator: Arc<V>) -> Self {
        Self {
            repository,
            validator,
            write_lock: Mutex::new(()),
        }
    }

    /// Shortens `url` and persists the association.
    ///
    /// The URL must answer `200 OK` before anything is written. An existing
    /// entry under the same code is overwritten, even if it points elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid or unreachable;
    /// the mapping is left untouched.
    ///
    /// Returns [`AppError::Storage`] if the mapping cannot be loaded or saved.
    pub async fn create(&self, url: &str) -> Result<ShortCode, AppError> {
        self.validator.validate(url).await?;

        let code = encode(url.as_bytes());

        let _guard = self.write_lock.lock().await;
        let mut mapping = self.repository.load().await?;

        if let Some(previous) = mapping.insert(&code, url)
            && previous != url
        {
            warn!(
                "Short code {} collided; replacing {} with {}",
                code, previous, url
            );
        }

        self.repository.save(&mapping).await?;
        info!("Stored mapping {} -> {}", code, url);

        Ok(code)
    }

    /// Resolves `key` to a redirect target.
    ///
    /// A stored short code resolves to its URL. Any other key is treated as
    /// a URL in its own right and passes through if it is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the key is neither a stored code
    /// nor a reachable URL.
    ///
    /// Returns [`AppError::Storage`] if the mapping cannot be loaded.
    pub async fn resolve(&self, key: &str) -> Result<Resolution, AppError> {
        let mapping = self.repository.load().await?;

        if let Some(url) = mapping.get(key) {
            debug!("Resolved stored code {} -> {}", key, url);
            return Ok(Resolution::Stored(url.to_string()));
        }

        self.validator.validate(key).await?;
        debug!("Passing through unmapped key {}", key);

        Ok(Resolution::Passthrough(key.to_string()))
    }

    /// Reports how many mappings are stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the mapping is unreadable.
    pub async fn mapping_count(&self) -> Result<usize, AppError> {
        Ok(self.repository.health().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlMapping;
    use crate::domain::reachability::{MockUrlValidator, ReachabilityError};
    use crate::domain::repositories::{MockMappingRepository, StoreError};
    use std::path::PathBuf;

    fn unreachable(url: &str) -> ReachabilityError {
        ReachabilityError::Status {
            url: url.to_string(),
            status: 404,
        }
    }

    fn mapping_of(urls: &[&str]) -> UrlMapping {
        let mut mapping = UrlMapping::new();
        for url in urls {
            mapping.insert(&encode(url.as_bytes()), *url);
        }
        mapping
    }

    #[tokio::test]
    async fn test_create_stores_encoded_code() {
        let mut repo = MockMappingRepository::new();
        let mut validator = MockUrlValidator::new();

        validator
            .expect_validate()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_load()
            .times(1)
            .returning(|| Ok(UrlMapping::new()));
        repo.expect_save()
            .withf(|mapping| mapping.get("aHR0cHM6Ly") == Some("https://example.com"))
            .times(1)
            .returning(|_| Ok(()));

        let service = UrlService::new(Arc::new(repo), Arc::new(validator));

        let code = service.create("https://example.com").await.unwrap();
        assert_eq!(code.as_str(), "aHR0cHM6Ly");
    }

    #[tokio::test]
    async fn test_create_unreachable_leaves_store_untouched() {
        let mut repo = MockMappingRepository::new();
        let mut validator = MockUrlValidator::new();

        validator
            .expect_validate()
            .times(1)
            .returning(|url| Err(unreachable(url)));
        repo.expect_load().times(0);
        repo.expect_save().times(0);

        let service = UrlService::new(Arc::new(repo), Arc::new(validator));

        let result = service.create("https://gone.example").await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_overwrites_colliding_code() {
        let mut repo = MockMappingRepository::new();
        let mut validator = MockUrlValidator::new();

        validator.expect_validate().returning(|_| Ok(()));
        repo.expect_load()
            .times(1)
            .returning(|| Ok(mapping_of(&["https://first.example"])));
        repo.expect_save()
            .withf(|mapping| {
                mapping.len() == 1 && mapping.get("aHR0cHM6Ly") == Some("https://second.example")
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = UrlService::new(Arc::new(repo), Arc::new(validator));

        let code = service.create("https://second.example").await.unwrap();
        assert_eq!(code.as_str(), "aHR0cHM6Ly");
    }

    #[tokio::test]
    async fn test_create_propagates_store_failure() {
        let mut repo = MockMappingRepository::new();
        let mut validator = MockUrlValidator::new();

        validator.expect_validate().returning(|_| Ok(()));
        repo.expect_load().times(1).returning(|| {
            Err(StoreError::NotFound {
                path: PathBuf::from("urlmapping.json"),
            })
        });
        repo.expect_save().times(0);

        let service = UrlService::new(Arc::new(repo), Arc::new(validator));

        let result = service.create("https://example.com").await;
        assert!(matches!(result, Err(AppError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_resolve_stored_code_skips_validation() {
        let mut repo = MockMappingRepository::new();
        let mut validator = MockUrlValidator::new();

        repo.expect_load()
            .times(1)
            .returning(|| Ok(mapping_of(&["https://www.wikipedia.org"])));
        validator.expect_validate().times(0);

        let service = UrlService::new(Arc::new(repo), Arc::new(validator));

        let resolution = service.resolve("aHR0cHM6Ly").await.unwrap();
        assert_eq!(
            resolution,
            Resolution::Stored("https://www.wikipedia.org".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_unmapped_reachable_url_passes_through() {
        let mut repo = MockMappingRepository::new();
        let mut validator = MockUrlValidator::new();

        repo.expect_load()
            .times(1)
            .returning(|| Ok(UrlMapping::new()));
        validator
            .expect_validate()
            .withf(|url| url == "https://www.wizardingworld.com")
            .times(1)
            .returning(|_| Ok(()));

        let service = UrlService::new(Arc::new(repo), Arc::new(validator));

        let resolution = service
            .resolve("https://www.wizardingworld.com")
            .await
            .unwrap();
        assert_eq!(
            resolution.clone(),
            Resolution::Passthrough("https://www.wizardingworld.com".to_string())
        );
        assert_eq!(resolution.into_target(), "https://www.wizardingworld.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_invalid_key_is_rejected() {
        let mut repo = MockMappingRepository::new();
        let mut validator = MockUrlValidator::new();

        repo.expect_load()
            .times(1)
            .returning(|| Ok(UrlMapping::new()));
        validator.expect_validate().times(1).returning(|url| {
            Err(ReachabilityError::InvalidUrl {
                url: url.to_string(),
                reason: "relative URL without a base".to_string(),
            })
        });

        let service = UrlService::new(Arc::new(repo), Arc::new(validator));

        let result = service.resolve("aHR0cHM6Lyyy").await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_mapping_count_uses_store_health() {
        let mut repo = MockMappingRepository::new();
        let validator = MockUrlValidator::new();

        repo.expect_health().times(1).returning(|| Ok(3));

        let service = UrlService::new(Arc::new(repo), Arc::new(validator));

        assert_eq!(service.mapping_count().await.unwrap(), 3);
    }
}
