//! Audit log domain models.
//!
//! Audit log entries are append-only facts written elsewhere in the system.
//! This crate only ever reads them, classifies them for display and projects
//! them into export formats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of recent entries shown on the audit log page.
pub const DEFAULT_RECENT_AUDIT_LOGS: i64 = 50;

/// Upper bound accepted for the configured recent-entry limit.
pub const MAX_RECENT_AUDIT_LOGS: i64 = 500;

/// A single audit log record joined with the acting user's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Store-assigned identifier.
    pub id: i64,

    /// Display name of the acting user. `None` when the user row no longer exists.
    pub user_name: Option<String>,

    /// Free-text action label, e.g. "Update Ministry".
    pub action: String,

    /// Free-text description. May contain markup or CSV metacharacters.
    pub details: String,

    /// When the action occurred.
    pub timestamp: DateTime<Utc>,
}

impl AuditLogEntry {
    /// Display category derived from the action label.
    pub fn category(&self) -> ActionCategory {
        classify(&self.action)
    }
}

/// Display category of an audit action. Styling hint only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    Login,
    Update,
    Delete,
    Create,
    Unclassified,
}

impl ActionCategory {
    /// CSS class applied to the table row.
    pub fn css_class(&self) -> &'static str {
        match self {
            ActionCategory::Login => "log-login",
            ActionCategory::Update => "log-update",
            ActionCategory::Delete => "log-delete",
            ActionCategory::Create => "log-create",
            ActionCategory::Unclassified => "log-other",
        }
    }
}

/// Classifies an action label by case-insensitive substring match.
///
/// Checks run in a fixed order and the first match wins:
/// "login", "update", "delete", then "create" or "insert".
pub fn classify(action: &str) -> ActionCategory {
    let action = action.to_lowercase();

    if action.contains("login") {
        ActionCategory::Login
    } else if action.contains("update") {
        ActionCategory::Update
    } else if action.contains("delete") {
        ActionCategory::Delete
    } else if action.contains("create") || action.contains("insert") {
        ActionCategory::Create
    } else {
        ActionCategory::Unclassified
    }
}

/// Download format for audit log exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// Parses the `format` query parameter.
    ///
    /// Matching is case-insensitive. A missing or unrecognized value falls
    /// back to CSV rather than rejecting the request.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("json") => ExportFormat::Json,
            Some("csv") | None => ExportFormat::Csv,
            Some(other) => {
                tracing::debug!(format = %other, "Unrecognized export format, using csv");
                ExportFormat::Csv
            }
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
