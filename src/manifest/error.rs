//! Error types for manifest loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading an emoji manifest.
///
/// Both variants are fatal for a run: they surface before any network call.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("cannot read manifest {path}: {source}")]
    Read {
        /// Path of the manifest file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not a flat JSON object of string values.
    #[error("invalid manifest JSON{}: {source}", display_path(.path.as_ref()))]
    Parse {
        /// Path of the manifest file, when loaded from disk.
        path: Option<PathBuf>,
        /// The underlying JSON error (carries line/column).
        #[source]
        source: serde_json::Error,
    },
}

impl ManifestError {
    /// Creates a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(path: Option<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse { path, source }
    }
}

fn display_path(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}
