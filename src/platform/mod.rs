//! Mattermost API client: identity resolution and custom emoji creation.
//!
//! # Endpoints
//!
//! - `GET {server}/api/v4/users/me` resolves the [`Principal`] the token
//!   belongs to. Called once per run, before any upload.
//! - `POST {server}/api/v4/emoji` creates an emoji from a multipart body with
//!   an `emoji` JSON field and an `image` file field.
//!
//! Both calls carry `Authorization: Bearer {token}`.
//!
//! The [`EmojiSink`] trait is the seam the import orchestrator uploads
//! through, so the orchestration logic can be exercised without a server.

mod emoji;
mod error;
mod identity;

pub use emoji::{UPLOAD_SUCCESS_STATUSES, extension_for_media_type};
pub use error::{DUPLICATE_OR_INVALID_NAME_STATUS, IdentityError, UploadError};

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::fetch::FetchedAsset;
use crate::http::HttpClient;

/// Base URL of the platform, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrl(String);

/// The server URL is not an absolute `http`/`https` URL.
#[derive(Debug, Error)]
#[error("invalid server URL {url:?}: expected an absolute http(s) URL")]
pub struct InvalidServerUrl {
    /// The rejected value.
    pub url: String,
}

impl ServerUrl {
    /// Validates and normalizes a server base URL.
    ///
    /// Trailing slashes are removed so endpoint paths can be appended directly.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidServerUrl`] unless `raw` parses as an absolute URL with
    /// an `http` or `https` scheme and a host.
    pub fn parse(raw: &str) -> Result<Self, InvalidServerUrl> {
        let trimmed = raw.trim().trim_end_matches('/');
        let valid = Url::parse(trimmed)
            .ok()
            .is_some_and(|u| matches!(u.scheme(), "http" | "https") && u.has_host());
        if !valid {
            return Err(InvalidServerUrl {
                url: raw.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Appends an API path (starting with `/`) to the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.0)
    }

    /// The normalized base URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Personal access token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// The user uploads are attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Principal {
    /// Platform user id, sent as `creator_id`.
    pub id: String,
}

/// Something that can create a custom emoji.
#[async_trait]
pub trait EmojiSink: Send + Sync {
    /// Creates emoji `name` from `asset`, attributed to `principal`.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::DuplicateOrInvalidName`] on status 400 and other
    /// [`UploadError`] variants for any other failure.
    async fn upload(
        &self,
        name: &str,
        asset: FetchedAsset,
        principal: &Principal,
    ) -> Result<(), UploadError>;
}

/// Authenticated client for the platform API.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    client: HttpClient,
    server: ServerUrl,
    token: AccessToken,
}

impl PlatformClient {
    /// Creates a client for `server` authenticated with `token`.
    #[must_use]
    pub fn new(client: HttpClient, server: ServerUrl, token: AccessToken) -> Self {
        Self {
            client,
            server,
            token,
        }
    }
}
