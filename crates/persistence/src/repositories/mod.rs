//! Repository implementations for database operations.

pub mod audit_log;
pub mod session;

pub use audit_log::AuditLogRepository;
pub use session::SessionRepository;
