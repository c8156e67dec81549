//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod rules;
pub mod scan;
pub mod validate;
