//! Shared HTTP client construction.
//!
//! One [`HttpClient`] is built per run and reused for the identity call,
//! every image fetch and every upload, so they share a connection pool and
//! the same timeout policy.

use std::time::Duration;

use reqwest::Client;
use tracing::instrument;

use crate::user_agent;

/// Default per-request timeout (30 seconds), covering connect, send and body.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout (10 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Thin wrapper around a configured [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with the default 30 second request timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest::Error` if the TLS backend or client
    /// builder cannot be initialised.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Creates a client with an explicit total request timeout.
    ///
    /// The connect timeout is capped at the request timeout.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    #[instrument(level = "debug")]
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let connect_timeout = timeout.min(Duration::from_secs(CONNECT_TIMEOUT_SECS));
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .gzip(true)
            .user_agent(user_agent::default_user_agent())
            .build()?;
        Ok(Self { client })
    }

    /// Returns a reference to the underlying reqwest client.
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }
}
