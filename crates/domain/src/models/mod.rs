//! Domain models for the data exchange portal.

pub mod audit_log;
pub mod principal;

pub use audit_log::{
    classify, ActionCategory, AuditLogEntry, ExportFormat, DEFAULT_RECENT_AUDIT_LOGS,
    MAX_RECENT_AUDIT_LOGS,
};
pub use principal::{Role, SessionPrincipal};
