//! JSON file implementation of the mapping repository.

use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingRepository, StoreError};

/// Stores the whole [`UrlMapping`] as one JSON document in a single file.
///
/// The file must exist before the repository is used; it is never created
/// implicitly. Every save rewrites the file in full: the new document is
/// written to a sibling staging file which then replaces the mapping file in
/// one rename, so readers see either the old or the new mapping. Saves through
/// one repository share a staging file and must not overlap.
pub struct FileMappingRepository {
    path: PathBuf,
}

impl FileMappingRepository {
    /// Creates a repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        if source.kind() == ErrorKind::NotFound {
            StoreError::NotFound {
                path: self.path.clone(),
            }
        } else {
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        }
    }

    /// Sibling path the next document is staged under.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("urlmapping"));
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }

    /// Atomically replaces the content of the existing mapping file.
    async fn replace_contents(&self, contents: &[u8]) -> Result<(), StoreError> {
        fs::metadata(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        let staging = self.staging_path();
        if let Err(e) = write_staged(&staging, contents).await {
            discard_staged(&staging).await;
            return Err(self.io_error(e));
        }

        if let Err(e) = fs::rename(&staging, &self.path).await {
            discard_staged(&staging).await;
            return Err(self.io_error(e));
        }

        Ok(())
    }
}

async fn write_staged(staging: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(staging).await?;
    file.write_all(contents).await?;
    file.sync_all().await
}

async fn discard_staged(staging: &Path) {
    if let Err(e) = fs::remove_file(staging).await
        && e.kind() != ErrorKind::NotFound
    {
        warn!("Failed to remove staging file {}: {}", staging.display(), e);
    }
}

#[async_trait]
impl MappingRepository for FileMappingRepository {
    async fn load(&self) -> Result<UrlMapping, StoreError> {
        let bytes = fs::read(&self.path).await.map_err(|e| self.io_error(e))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!("Mapping file {} is empty", self.path.display());
            return Ok(UrlMapping::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, mapping: &UrlMapping) -> Result<(), StoreError> {
        let json = serde_json::to_vec(mapping).map_err(StoreError::Encode)?;

        self.replace_contents(&json).await?;

        debug!(
            "Saved {} mappings to {}",
            mapping.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.replace_contents(&[]).await?;
        debug!("Cleared mapping file {}", self.path.display());
        Ok(())
    }
}
