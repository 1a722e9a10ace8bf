//! # Error Types
//!
//! Validation error types for ecopower-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ecopower-core errors (this file)                                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  ecopower-store errors (separate crate)                                │
//! │  └── StoreError       - Database operation failures                    │
//! │      └── Invalid(ValidationError)  ← validation surfaces here when     │
//! │                                      an entity is rejected on staging  │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → caller                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when an entity doesn't meet the domain rules.
/// Repositories reject such entities before anything is staged, so a
/// `ValidationError` always means nothing was written or queued.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., characters a phone number cannot contain).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "surname".to_string(),
        };
        assert_eq!(err.to_string(), "surname is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }

    #[test]
    fn test_invalid_format_message() {
        let err = ValidationError::InvalidFormat {
            field: "cell_phone".to_string(),
            reason: "must contain only digits, spaces, '+' and '-'".to_string(),
        };
        assert!(err.to_string().starts_with("cell_phone has invalid format"));
    }
}
