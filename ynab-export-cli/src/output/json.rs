//! File-mode output.
//!
//! Writes the export document as pretty JSON (2-space indentation) to a
//! uniquely named file. The filename embeds an RFC 3339 UTC timestamp with
//! `:` and `.` replaced by `-`, so successive runs never collide.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use ynab_export_core::ExportDocument;

/// Builds the export filename for the given instant,
/// e.g. `ynab-budget-summary-2026-08-31T10-15-00-000Z.json`.
pub fn timestamped_filename(prefix: &str, at: DateTime<Utc>) -> String {
    let stamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{prefix}-{stamp}.json")
}

/// Writes the document to `dir`, creating the directory if needed.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Fails if the directory cannot be created, the document cannot be
/// serialized, or the file cannot be written.
pub async fn write_export(
    dir: &Path,
    prefix: &str,
    document: &ExportDocument,
) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let path = dir.join(timestamped_filename(prefix, document.exported_at));
    let json = serde_json::to_string_pretty(document).context("failed to serialize export")?;

    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), "Wrote export");
    Ok(path)
}
