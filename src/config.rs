//! Run configuration.
//!
//! [`ImportConfig`] is built once at startup from the command line and passed
//! by reference to everything that needs it.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::platform::{AccessToken, InvalidServerUrl, ServerUrl};

/// Default pause between consecutive manifest entries (milliseconds).
pub const DEFAULT_DELAY_MS: u64 = 200;

/// Default per-request timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = crate::http::REQUEST_TIMEOUT_SECS;

/// Invalid run configuration. Always fatal, raised before any network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Server base URL is not usable.
    #[error(transparent)]
    InvalidServer(#[from] InvalidServerUrl),

    /// Token is empty or whitespace.
    #[error("access token must not be empty")]
    EmptyToken,

    /// Manifest path is empty.
    #[error("manifest file path must not be empty")]
    EmptyManifestPath,

    /// Request timeout of zero would fail every call.
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Everything a run needs, validated.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Platform base URL.
    pub server: ServerUrl,
    /// Personal access token.
    pub token: AccessToken,
    /// Path of the JSON manifest.
    pub manifest_path: PathBuf,
    /// Pause between consecutive entries.
    pub delay: Duration,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ImportConfig {
    /// Validates the three required parameters, with default pacing and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an invalid server URL, a blank token or an
    /// empty manifest path.
    pub fn new(
        server: &str,
        token: &str,
        manifest_path: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let server = ServerUrl::parse(server)?;

        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }

        let manifest_path = manifest_path.into();
        if manifest_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyManifestPath);
        }

        Ok(Self {
            server,
            token: AccessToken::new(token),
            manifest_path,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Overrides the inter-entry pause. Zero disables pacing.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Overrides the per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] for a zero duration.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        self.timeout = timeout;
        Ok(self)
    }
}
