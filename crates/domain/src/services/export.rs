//! Audit log export serialization.
//!
//! Every export is a pure projection of the entries passed in; input order
//! is preserved and nothing is mutated.

use chrono::NaiveDate;
use shared::timefmt::{dated_filename, store_timestamp};

use crate::error::ExportError;
use crate::models::{AuditLogEntry, ExportFormat};

/// CSV header row.
pub const CSV_HEADER: [&str; 5] = ["ID", "User", "Action", "Details", "Timestamp"];

const EXPORT_FILE_STEM: &str = "audit_logs";

/// A complete export body plus the metadata needed to serve it.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub body: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

/// Serializes `entries` in `format`, naming the file after `today`.
pub fn export_audit_logs(
    entries: &[AuditLogEntry],
    format: ExportFormat,
    today: NaiveDate,
) -> Result<ExportFile, ExportError> {
    let body = match format {
        ExportFormat::Csv => to_csv(entries)?,
        ExportFormat::Json => to_json(entries)?,
    };

    Ok(ExportFile {
        body,
        content_type: format.content_type(),
        filename: dated_filename(EXPORT_FILE_STEM, today, format.extension()),
    })
}

/// Writes a header row followed by one row per entry.
/// Fields containing delimiters, quotes or line breaks are quoted.
pub fn to_csv(entries: &[AuditLogEntry]) -> Result<Vec<u8>, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;

    for entry in entries {
        wtr.write_record([
            entry.id.to_string().as_str(),
            entry.user_name.as_deref().unwrap_or(""),
            entry.action.as_str(),
            entry.details.as_str(),
            store_timestamp(&entry.timestamp).as_str(),
        ])?;
    }

    wtr.into_inner()
        .map_err(|e| ExportError::CsvFlush(e.error().to_string()))
}

/// Pretty-printed JSON array of entries.
pub fn to_json(entries: &[AuditLogEntry]) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(entries)?)
}
