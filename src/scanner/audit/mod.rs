//! Audit logging module
//!
//! Provides an append-only audit trail of scans.

pub mod logger;

pub use logger::AuditLogger;
