//! Error types for platform API calls.

use thiserror::Error;

/// Status the platform answers with when an emoji name already exists or is
/// not acceptable. The two causes cannot be told apart from the response.
pub const DUPLICATE_OR_INVALID_NAME_STATUS: u16 = 400;

/// Errors from resolving the acting user. Always fatal for a run.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Network-level error reaching the identity endpoint.
    #[error("network error resolving identity at {url}: {source}")]
    Network {
        /// Identity endpoint URL.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Identity request timed out.
    #[error("timeout resolving identity at {url}")]
    Timeout {
        /// Identity endpoint URL.
        url: String,
    },

    /// Identity endpoint answered with a non-success status.
    #[error("status {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
        /// Response body, for the operator.
        body: String,
    },

    /// Identity response was not the expected JSON.
    #[error("unexpected identity response: {source}")]
    Decode {
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

impl IdentityError {
    /// Creates a transport error, promoting reqwest timeouts to [`IdentityError::Timeout`].
    pub fn from_reqwest(url: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { url: url.into() }
        } else {
            Self::Network {
                url: url.into(),
                source,
            }
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }
}

/// Errors from creating a custom emoji. Always per-entry.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The platform refused the name: either it already exists or it is invalid.
    #[error("name {name:?} already exists or is invalid (status 400): {body}")]
    DuplicateOrInvalidName {
        /// Sanitized name that was sent.
        name: String,
        /// Response body, kept for logging.
        body: String,
    },

    /// Any other non-success status.
    #[error("status {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Network-level error sending the upload.
    #[error("network error uploading {name:?}: {source}")]
    Network {
        /// Sanitized name that was being uploaded.
        name: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Upload timed out.
    #[error("timeout uploading {name:?}")]
    Timeout {
        /// Sanitized name that was being uploaded.
        name: String,
    },

    /// The multipart request could not be assembled.
    #[error("cannot build upload request for {name:?}: {source}")]
    Request {
        /// Sanitized name that was being uploaded.
        name: String,
        /// The underlying error.
        #[source]
        source: reqwest::Error,
    },
}

impl UploadError {
    /// Maps a non-success status to the matching variant.
    ///
    /// Classification is by numeric equality with
    /// [`DUPLICATE_OR_INVALID_NAME_STATUS`], never by message text.
    pub fn from_status(name: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        if status == DUPLICATE_OR_INVALID_NAME_STATUS {
            Self::DuplicateOrInvalidName {
                name: name.into(),
                body: body.into(),
            }
        } else {
            Self::HttpStatus {
                status,
                body: body.into(),
            }
        }
    }

    /// Creates a transport error, promoting reqwest timeouts to [`UploadError::Timeout`].
    pub fn from_reqwest(name: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { name: name.into() }
        } else {
            Self::Network {
                name: name.into(),
                source,
            }
        }
    }

    /// Whether this is the expected "already exists or invalid name" rejection.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateOrInvalidName { .. })
    }

    /// HTTP status carried by the error, if the platform answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::DuplicateOrInvalidName { .. } => Some(DUPLICATE_OR_INVALID_NAME_STATUS),
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
