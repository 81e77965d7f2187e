//! Sequential, paced import of a manifest.
//!
//! Every manifest entry goes through the same pipeline and ends in exactly
//! one [`EntryOutcome`]:
//!
//! ```text
//! sanitize name ─┬─ alias:…  ─────────────────────────────▶ AliasSkipped
//!                └─ url ─ fetch ─┬─ error ────────────────▶ FetchFailed
//!                                └─ ok ─ upload ─┬─ 200/201 ▶ Uploaded
//!                                                ├─ 400 ────▶ DuplicateSkipped
//!                                                └─ other ──▶ UploadFailed
//! ```
//!
//! Entries are handled one at a time, with a fixed [`Pacer`] pause between
//! consecutive entries. Per-entry failures are recorded and reported; only
//! the setup steps in [`run_import`] (manifest, HTTP client, identity) can
//! abort a run.
//!
//! # Example
//!
//! ```no_run
//! use emoji_importer_core::ImportConfig;
//! use emoji_importer_core::import::run_import;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ImportConfig::new("https://chat.example.com", "TOKEN", "emoji.json")?;
//! let report = run_import(&config, &mut std::io::stdout()).await?;
//! println!("uploaded {}", report.uploaded());
//! # Ok(())
//! # }
//! ```

mod error;
mod pacer;
mod report;

pub use error::ImportError;
pub use pacer::Pacer;
pub use report::{outcome_text, print_banner, print_summary};

use std::io::Write;

use tracing::{debug, info, instrument, warn};

use crate::config::ImportConfig;
use crate::fetch::{FetchError, ImageFetcher, ImageSource};
use crate::http::HttpClient;
use crate::manifest::{Manifest, Source};
use crate::platform::{EmojiSink, PlatformClient, Principal, UploadError};
use crate::sanitize::sanitize_emoji_name;

/// Terminal state of one manifest entry.
#[derive(Debug)]
pub enum EntryOutcome {
    /// Source was `alias:<target>`; nothing fetched or uploaded.
    AliasSkipped {
        /// Name the alias points at.
        target: String,
    },
    /// Emoji created.
    Uploaded,
    /// Platform answered 400: the name already exists or is invalid.
    DuplicateSkipped,
    /// Source image could not be fetched; no upload attempted.
    FetchFailed(FetchError),
    /// Upload failed for any reason other than a duplicate/invalid name.
    UploadFailed(UploadError),
}

impl EntryOutcome {
    /// Whether the entry counts as a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed(_) | Self::UploadFailed(_))
    }
}

/// Outcome of one entry together with its names.
#[derive(Debug)]
pub struct OutcomeRecord {
    /// Name as written in the manifest.
    pub original: String,
    /// Name sent to the platform.
    pub sanitized: String,
    /// What happened.
    pub outcome: EntryOutcome,
}

/// All outcomes of a run, in processing order.
#[derive(Debug, Default)]
pub struct ImportReport {
    records: Vec<OutcomeRecord>,
}

impl ImportReport {
    /// Per-entry records.
    #[must_use]
    pub fn records(&self) -> &[OutcomeRecord] {
        &self.records
    }

    /// Number of entries processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Number of emojis created.
    #[must_use]
    pub fn uploaded(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Uploaded))
    }

    /// Number of entries rejected as duplicate or invalid names.
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::DuplicateSkipped))
    }

    /// Number of alias entries skipped.
    #[must_use]
    pub fn aliases(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::AliasSkipped { .. }))
    }

    /// Number of fetch or upload failures.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(EntryOutcome::is_failure)
    }

    fn count(&self, predicate: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| predicate(&r.outcome)).count()
    }
}

/// Drives the per-entry pipeline over a manifest.
pub struct ImportOrchestrator {
    images: Box<dyn ImageSource>,
    emojis: Box<dyn EmojiSink>,
    pacer: Pacer,
}

impl ImportOrchestrator {
    /// Creates an orchestrator from its collaborators.
    #[must_use]
    pub fn new(images: Box<dyn ImageSource>, emojis: Box<dyn EmojiSink>, pacer: Pacer) -> Self {
        Self {
            images,
            emojis,
            pacer,
        }
    }

    /// The pacer, for inspecting how often the run waited.
    #[must_use]
    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    /// Processes every manifest entry in order, writing one report line each.
    ///
    /// # Errors
    ///
    /// Only write errors on `out` are returned; entry failures are recorded in
    /// the report.
    #[instrument(
        skip_all,
        fields(entries = manifest.len(), creator = %principal.id, delay = ?self.pacer.delay())
    )]
    pub async fn run<W: Write>(
        &mut self,
        manifest: &Manifest,
        principal: &Principal,
        out: &mut W,
    ) -> Result<ImportReport, ImportError> {
        let mut report = ImportReport::default();

        for (index, (original, source)) in manifest.iter().enumerate() {
            if index > 0 {
                self.pacer.pause().await;
            }

            let sanitized = sanitize_emoji_name(original);
            report::write_entry_prefix(out, original, &sanitized)?;

            let outcome = self.process_entry(&sanitized, source, principal).await;
            report::write_entry_outcome(out, &outcome)?;
            log_outcome(original, &sanitized, &outcome);

            report.records.push(OutcomeRecord {
                original: original.to_string(),
                sanitized,
                outcome,
            });
        }

        info!(
            uploaded = report.uploaded(),
            duplicates = report.duplicates(),
            aliases = report.aliases(),
            failed = report.failed(),
            total = report.total(),
            paused = ?self.pacer.total_paused(),
            "import complete"
        );
        Ok(report)
    }

    /// Runs one entry through alias check, fetch and upload.
    pub async fn process_entry(
        &self,
        sanitized: &str,
        source: Source<'_>,
        principal: &Principal,
    ) -> EntryOutcome {
        let url = match source {
            Source::Alias(target) => {
                return EntryOutcome::AliasSkipped {
                    target: target.to_string(),
                };
            }
            Source::Url(url) => url,
        };

        let asset = match self.images.fetch(url).await {
            Ok(asset) => asset,
            Err(error) => return EntryOutcome::FetchFailed(error),
        };

        match self.emojis.upload(sanitized, asset, principal).await {
            Ok(()) => EntryOutcome::Uploaded,
            Err(error) if error.is_duplicate() => EntryOutcome::DuplicateSkipped,
            Err(error) => EntryOutcome::UploadFailed(error),
        }
    }
}

fn log_outcome(original: &str, sanitized: &str, outcome: &EntryOutcome) {
    match outcome {
        EntryOutcome::FetchFailed(error) => {
            warn!(original, sanitized, error = %error, "fetch failed");
        }
        EntryOutcome::UploadFailed(error) => {
            warn!(original, sanitized, error = %error, "upload failed");
        }
        other => debug!(original, sanitized, outcome = ?other, "entry done"),
    }
}

/// Runs a complete import: load manifest, resolve the user, process entries.
///
/// The manifest is loaded before any network call, and the user is resolved
/// once before the first upload.
///
/// # Errors
///
/// Returns [`ImportError`] for the fatal setup failures and for write errors
/// on `out`.
#[instrument(skip_all, fields(server = %config.server, manifest = %config.manifest_path.display()))]
pub async fn run_import<W: Write>(
    config: &ImportConfig,
    out: &mut W,
) -> Result<ImportReport, ImportError> {
    let manifest = Manifest::load(&config.manifest_path).await?;

    let http = HttpClient::with_timeout(config.timeout).map_err(ImportError::HttpClient)?;
    let platform = PlatformClient::new(http.clone(), config.server.clone(), config.token.clone());
    let principal = platform.resolve_identity().await?;

    print_banner(out, manifest.len())?;

    let mut orchestrator = ImportOrchestrator::new(
        Box::new(ImageFetcher::new(http)),
        Box::new(platform),
        Pacer::new(config.delay),
    );
    let report = orchestrator.run(&manifest, &principal, out).await?;

    print_summary(out, &report)?;
    Ok(report)
}
