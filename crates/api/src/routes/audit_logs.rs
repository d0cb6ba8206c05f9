//! Audit log page and export endpoint.
//!
//! `GET /admin/audit-logs` renders the most recent entries as an HTML table.
//! With `?export` present it instead streams the same entries back as a
//! CSV (default) or JSON download.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Extension,
};
use chrono::Utc;
use domain::models::{AuditLogEntry, ExportFormat, SessionPrincipal};
use domain::services::{export_audit_logs, AuditLogReader, ExportFile};
use serde::Deserialize;
use shared::html::escape_html;
use shared::timefmt::display_timestamp;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{record_audit_export, record_audit_store_failure};

/// Visible table columns. ID is carried in exports only.
const TABLE_COLUMNS: [&str; 4] = ["User", "Action", "Details", "Timestamp"];

const EMPTY_PLACEHOLDER: &str = "No audit logs found";

/// Query parameters for the audit log page.
#[derive(Debug, Default, Deserialize)]
pub struct AuditLogPageQuery {
    /// Presence alone requests an export; the value is ignored.
    pub export: Option<String>,
    pub format: Option<String>,
}

impl AuditLogPageQuery {
    /// The requested export format, or `None` for the HTML page.
    pub fn export_format(&self) -> Option<ExportFormat> {
        self.export
            .as_ref()
            .map(|_| ExportFormat::from_param(self.format.as_deref()))
    }
}

/// Render the audit log page or an export download.
///
/// Store failures never surface here: the reader degrades them to an empty
/// result and the response is still a normal 200.
pub async fn audit_logs_page(
    State(state): State<AppState>,
    Extension(principal): Extension<SessionPrincipal>,
    Query(query): Query<AuditLogPageQuery>,
) -> Result<Response, ApiError> {
    let recent = AuditLogReader::new(state.audit_logs.as_ref(), state.config.audit.recent_limit)
        .fetch_recent()
        .await;

    if recent.store_unavailable {
        record_audit_store_failure();
    }

    match query.export_format() {
        Some(format) => {
            let file = export_audit_logs(&recent.entries, format, Utc::now().date_naive())?;

            record_audit_export(format);
            tracing::info!(
                user_id = principal.user_id,
                format = %format,
                records = recent.entries.len(),
                "Audit logs exported"
            );

            Ok(export_response(file))
        }
        None => Ok(Html(render_page(&principal, &recent.entries)).into_response()),
    }
}

/// Wrap an export body as an attachment download.
fn export_response(file: ExportFile) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", file.filename),
            ),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
        file.body,
    )
        .into_response()
}

/// Full HTML document for the audit log page.
pub fn render_page(principal: &SessionPrincipal, entries: &[AuditLogEntry]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Audit Logs</title>\n</head>\n<body>\n",
    );

    html.push_str("<header>\n<h1>Audit Logs</h1>\n");
    html.push_str(&format!(
        "<p class=\"signed-in\">Signed in as {}</p>\n",
        escape_html(&principal.display_name)
    ));
    html.push_str(
        "<nav class=\"export\">\
         <a href=\"?export&amp;format=csv\">Export CSV</a> \
         <a href=\"?export&amp;format=json\">Export JSON</a>\
         </nav>\n</header>\n",
    );

    html.push_str("<table class=\"audit-logs\">\n<thead>\n<tr>");
    for column in TABLE_COLUMNS {
        html.push_str(&format!("<th>{}</th>", column));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    html.push_str(&render_rows(entries));
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");

    html
}

/// Table body rows, or a single placeholder row when there are no entries.
pub fn render_rows(entries: &[AuditLogEntry]) -> String {
    if entries.is_empty() {
        return format!(
            "<tr><td colspan=\"{}\" class=\"empty\">{}</td></tr>\n",
            TABLE_COLUMNS.len(),
            EMPTY_PLACEHOLDER
        );
    }

    entries.iter().map(render_row).collect()
}

fn render_row(entry: &AuditLogEntry) -> String {
    format!(
        "<tr class=\"{}\"><td>{}</td><td><span class=\"action\">{}</span></td><td>{}</td><td>{}</td></tr>\n",
        entry.category().css_class(),
        escape_html(entry.user_name.as_deref().unwrap_or("Unknown user")),
        escape_html(&entry.action),
        escape_html(&entry.details),
        display_timestamp(&entry.timestamp),
    )
}
