//! Domain models and types for the checker.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Documents** ([`Document`], [`DocumentSource`], [`DocumentFormat`])
//! - **Findings** ([`Finding`], [`Severity`])
//! - **Error types** ([`CheckerError`], [`InputError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T, CheckerError>`]:
//!
//! ```rust
//! use mfippa::domain::{CheckerError, InputError, Result};
//!
//! fn require_text(text: &str) -> Result<()> {
//!     if text.trim().is_empty() {
//!         return Err(InputError::EmptyDocument.into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(matches!(require_text(""), Err(CheckerError::Input(_))));
//! ```

pub mod document;
pub mod errors;
pub mod finding;
pub mod result;

// Re-export commonly used types for convenience
pub use document::{Document, DocumentFormat, DocumentSource};
pub use errors::{CheckerError, InputError};
pub use finding::{Finding, Severity};
pub use result::Result;
