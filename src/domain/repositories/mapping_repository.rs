//! Repository trait for the persisted URL mapping.

use crate::domain::entities::UrlMapping;
use async_trait::async_trait;
use std::path::PathBuf;

/// Failures of the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("mapping file {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("mapping file {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode mapping: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error on mapping file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Whole-aggregate access to the stored [`UrlMapping`].
///
/// There is no per-entry API. Callers load the full mapping, modify it, and
/// save it back in full.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileMappingRepository`] - JSON file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Reads the complete mapping.
    ///
    /// An existing but empty backing store yields an empty mapping.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the backing store is absent
    /// - [`StoreError::Malformed`] if its content cannot be parsed
    /// - [`StoreError::Io`] on read failure
    async fn load(&self) -> Result<UrlMapping, StoreError>;

    /// Overwrites the backing store with `mapping`.
    ///
    /// The backing store must already exist.
    async fn save(&self, mapping: &UrlMapping) -> Result<(), StoreError>;

    /// Discards every stored association.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Returns the number of stored entries if the store is readable.
    async fn health(&self) -> Result<usize, StoreError> {
        Ok(self.load().await?.len())
    }
}
