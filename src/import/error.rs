//! Error types for a whole import run.

use thiserror::Error;

use crate::manifest::ManifestError;
use crate::platform::IdentityError;

/// Failures that abort a run. Per-entry failures never surface here.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Manifest could not be read or parsed.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// HTTP client could not be constructed.
    #[error("cannot build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The token's user could not be resolved.
    #[error("cannot resolve user from token: {0}")]
    Identity(#[from] IdentityError),

    /// Writing the console report failed.
    #[error("cannot write report: {0}")]
    Output(#[from] std::io::Error),
}
