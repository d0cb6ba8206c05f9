//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod audit_log;
pub mod session;

pub use audit_log::AuditLogEntity;
pub use session::SessionPrincipalEntity;
