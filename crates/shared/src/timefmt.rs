//! Date and time formatting used by page rendering and exports.

use chrono::{DateTime, NaiveDate, Utc};

/// Formats a timestamp for display, e.g. `Jan 10, 2024 08:00` (24-hour).
pub fn display_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M").to_string()
}

/// Formats a timestamp the way the store renders datetimes, e.g.
/// `2024-01-10 08:00:00`.
pub fn store_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Builds a dated download filename, e.g. `audit_logs_2024-01-10.csv`.
pub fn dated_filename(stem: &str, date: NaiveDate, extension: &str) -> String {
    format!("{}_{}.{}", stem, date.format("%Y-%m-%d"), extension)
}
