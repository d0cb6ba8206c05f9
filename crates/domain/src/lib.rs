//! Domain layer for the data exchange portal.
//!
//! This crate contains:
//! - Domain models (AuditLogEntry, SessionPrincipal, ActionCategory)
//! - Store interfaces implemented by the persistence layer
//! - Access policy, audit log reader and exporter
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;
