//! Console report lines.
//!
//! One banner, one line per manifest entry, one closing summary. Each entry
//! line is written in two halves: the `Processing:` prefix before the entry
//! is handled, the outcome once it is known.

use std::io::{self, Write};

use super::{EntryOutcome, ImportReport};

/// Writes the opening banner with the number of entries.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn print_banner<W: Write>(out: &mut W, total: usize) -> io::Result<()> {
    writeln!(out, "🚀 Starting import of {total} emojis...")?;
    writeln!(out)
}

pub(crate) fn write_entry_prefix<W: Write>(
    out: &mut W,
    original: &str,
    sanitized: &str,
) -> io::Result<()> {
    write!(out, "Processing: [:{original}:] -> [:{sanitized}:]... ")?;
    out.flush()
}

pub(crate) fn write_entry_outcome<W: Write>(out: &mut W, outcome: &EntryOutcome) -> io::Result<()> {
    writeln!(out, "{}", outcome_text(outcome))
}

/// Human-readable text for an outcome, as printed after the entry prefix.
#[must_use]
pub fn outcome_text(outcome: &EntryOutcome) -> String {
    match outcome {
        EntryOutcome::Uploaded => "✅ Success!".to_string(),
        EntryOutcome::DuplicateSkipped => {
            "⚠️  Skipped (already exists or invalid name)".to_string()
        }
        EntryOutcome::AliasSkipped { .. } => {
            "⏭️  Skipped (alias - references existing emoji)".to_string()
        }
        EntryOutcome::FetchFailed(error) => format!("❌ Download error: {error}"),
        EntryOutcome::UploadFailed(error) => format!("❌ Upload error: {error}"),
    }
}

/// Writes the closing summary line.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn print_summary<W: Write>(out: &mut W, report: &ImportReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "🏁 Done: {} uploaded, {} already existed or invalid, {} aliases skipped, {} failed",
        report.uploaded(),
        report.duplicates(),
        report.aliases(),
        report.failed()
    )
}
