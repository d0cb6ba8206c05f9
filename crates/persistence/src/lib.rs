//! Persistence layer for the data exchange portal.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - SQL-backed implementations of the domain store traits

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
