//! Domain services.

pub mod access;
pub mod audit;
pub mod export;

pub use access::AccessPolicy;
pub use audit::{AuditLogReader, AuditLogStore, RecentAuditLogs, SessionStore};
pub use export::{export_audit_logs, ExportFile};
