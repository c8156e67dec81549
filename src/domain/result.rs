//! Result type alias for the checker
//!
//! This module provides a convenient Result type alias that uses
//! [`CheckerError`] as the error type.

use super::errors::CheckerError;

/// Result type alias for checker operations
///
/// # Examples
///
/// ```
/// use mfippa::domain::result::Result;
/// use mfippa::domain::errors::CheckerError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(CheckerError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CheckerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{CheckerError, InputError};

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(CheckerError::Validation("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<usize> {
            Ok(42)
        }

        fn failing() -> Result<usize> {
            Err(InputError::EmptyDocument.into())
        }

        assert_eq!(inner()?, 42);
        assert!(failing().is_err());
        Ok(())
    }
}
