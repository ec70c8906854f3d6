//! Unified error types for the domain layer
//!
//! Provides a common error type for domain operations so that callers in the
//! engine can propagate failures with `?` instead of stringly-typed errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A 1-based position fell outside `1..=len`
    #[error("Position {position} is out of range for a collection of {len} elements")]
    OutOfRange { position: usize, len: usize },

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for enums read back from storage)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create an out-of-range error for a 1-based position
    pub fn out_of_range(position: usize, len: usize) -> Self {
        Self::OutOfRange { position, len }
    }

    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a constructor is handed values the entity cannot hold,
    /// such as a rating score above the maximum.
    ///
    /// # Example
    /// ```ignore
    /// if score > Rating::MAX_SCORE {
    ///     return Err(DomainError::validation("Rating score must be at most 5"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Check if this is an out-of-range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_error() {
        let err = DomainError::out_of_range(0, 3);
        assert!(err.is_out_of_range());
        assert_eq!(
            err.to_string(),
            "Position 0 is out of range for a collection of 3 elements"
        );
    }

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("score must be at most 5");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: score must be at most 5");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown authority: VIP");
        assert!(!err.is_out_of_range());
        assert_eq!(err.to_string(), "Parse error: Unknown authority: VIP");
    }
}
