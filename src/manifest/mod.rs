//! Emoji manifest loading and source classification.
//!
//! A manifest is a flat JSON object mapping an emoji's original name to its
//! source. A source is either an image URL or an alias reference of the form
//! `alias:<existing-name>`, as produced by Slack's emoji export:
//!
//! ```json
//! {
//!   "party parrot": "https://emoji.example.com/parrot.gif",
//!   "squirrel": "alias:shipit"
//! }
//! ```
//!
//! Entries are kept in a sorted map so a run always visits them in the same
//! order.

mod error;

pub use error::ManifestError;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

/// Prefix marking a manifest value as an alias of an existing emoji.
pub const ALIAS_PREFIX: &str = "alias:";

/// Classified manifest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// An image to fetch and upload.
    Url(&'a str),
    /// A reference to an emoji that already exists; nothing to upload.
    Alias(&'a str),
}

impl<'a> Source<'a> {
    /// Classifies a raw manifest value by its literal `alias:` prefix.
    #[must_use]
    pub fn classify(raw: &'a str) -> Self {
        match raw.strip_prefix(ALIAS_PREFIX) {
            Some(target) => Self::Alias(target),
            None => Self::Url(raw),
        }
    }
}

/// Parsed emoji manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    /// Parses a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] when the text is not a JSON object
    /// whose values are all strings.
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(text).map_err(|e| ManifestError::parse(None, e))
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Read`] if the file cannot be read and
    /// [`ManifestError::Parse`] if its content is malformed.
    #[instrument(fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ManifestError::read(path, e))?;
        let manifest: Self = serde_json::from_str(&text)
            .map_err(|e| ManifestError::parse(Some(path.to_path_buf()), e))?;
        debug!(entries = manifest.len(), "manifest loaded");
        Ok(manifest)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in name order as `(original_name, source)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Source<'_>)> {
        self.entries
            .iter()
            .map(|(name, raw)| (name.as_str(), Source::classify(raw)))
    }
}

impl<K, V> FromIterator<(K, V)> for Manifest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
