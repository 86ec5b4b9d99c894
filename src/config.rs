//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `MAPPING_FILE` - Path of the JSON mapping file (default: `urlmapping.json`).
//!   The file must already exist; use `admin store init` to create it.
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `VALIDATION_TIMEOUT_MS` - Reachability check timeout (default: 1000, max: 60000)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default backing file, relative to the working directory.
pub const DEFAULT_MAPPING_FILE: &str = "urlmapping.json";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub mapping_file: PathBuf,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound for one outbound reachability check, in milliseconds.
    pub validation_timeout_ms: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `VALIDATION_TIMEOUT_MS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let mapping_file = env::var("MAPPING_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MAPPING_FILE));

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let validation_timeout_ms = match env::var("VALIDATION_TIMEOUT_MS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("VALIDATION_TIMEOUT_MS must be a number, got '{}'", v))?,
            Err(_) => 1000,
        };

        Ok(Self {
            mapping_file,
            listen_addr,
            log_level,
            log_format,
            validation_timeout_ms,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `mapping_file` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `validation_timeout_ms` is outside `1..=60000`
    pub fn validate(&self) -> Result<()> {
        if self.mapping_file.as_os_str().is_empty() {
            anyhow::bail!("MAPPING_FILE must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.validation_timeout_ms == 0 || self.validation_timeout_ms > 60_000 {
            anyhow::bail!(
                "VALIDATION_TIMEOUT_MS must be between 1 and 60000, got {}",
                self.validation_timeout_ms
            );
        }

        Ok(())
    }

    pub fn validation_timeout(&self) -> Duration {
        Duration::from_millis(self.validation_timeout_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Mapping file: {}", self.mapping_file.display());
        tracing::info!("  Validation timeout: {}ms", self.validation_timeout_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is unparsable or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
