//! Shared utilities for the data exchange portal.
//!
//! This crate provides small, dependency-light helpers used across the
//! other crates:
//! - Session token hashing
//! - HTML escaping for server-rendered pages
//! - Date formatting for display and export filenames

pub mod crypto;
pub mod html;
pub mod timefmt;
