//! Image retrieval from source URLs.
//!
//! [`ImageFetcher`] downloads a source image into memory with a single,
//! bounded-timeout attempt and keeps the declared `Content-Type` verbatim.
//! The [`ImageSource`] trait is the seam the import orchestrator depends on.

mod error;

pub use error::FetchError;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};
use url::Url;

use crate::http::HttpClient;

/// Image bytes plus the media type the source declared for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedAsset {
    /// Full response body.
    pub bytes: Vec<u8>,
    /// Raw `Content-Type` header value; `None` when the header was absent
    /// or not valid header text.
    pub media_type: Option<String>,
}

/// Something that can produce image bytes for a URL.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetches the image at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on network failure, timeout, invalid URL or a
    /// non-success status.
    async fn fetch(&self, url: &str) -> Result<FetchedAsset, FetchError>;
}

/// HTTP implementation of [`ImageSource`].
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: HttpClient,
}

impl ImageFetcher {
    /// Creates a fetcher sharing the given client.
    #[must_use]
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageSource for ImageFetcher {
    #[instrument(skip(self), fields(url = %url))]
    async fn fetch(&self, url: &str) -> Result<FetchedAsset, FetchError> {
        let parsed = Url::parse(url).map_err(|_| FetchError::invalid_url(url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::invalid_url(url));
        }

        let response = self
            .client
            .inner()
            .get(parsed)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?
            .to_vec();

        debug!(bytes = bytes.len(), media_type = ?media_type, "image fetched");
        Ok(FetchedAsset { bytes, media_type })
    }
}
