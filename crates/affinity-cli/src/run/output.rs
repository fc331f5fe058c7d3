//! Directory CSV and last-run marker files.

use std::path::Path;

use affinity_core::{BusinessRecord, Column};
use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};

/// Writes the directory CSV with a header row and `columns` in order.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub(crate) fn write_directory_csv(
    path: &Path,
    records: &[BusinessRecord],
    columns: &[Column],
) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(columns.iter().map(|c| c.header()))?;
    for record in records {
        writer.write_record(columns.iter().map(|c| record.cell(*c)))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// ISO-8601 UTC timestamp with microseconds and a `+00:00` offset.
pub(crate) fn format_run_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Overwrites the run marker with the current UTC time.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub(crate) fn write_run_marker(path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, format_run_timestamp(Utc::now()))
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved run timestamp");
    Ok(())
}
