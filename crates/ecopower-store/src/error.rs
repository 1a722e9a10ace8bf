//! # Store Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)          ValidationError (ecopower-core)   │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller decides: surface, retry the request, or abort the unit of work │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use ecopower_core::ValidationError;
use thiserror::Error;

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for debugging and user feedback.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity was rejected before staging.
    ///
    /// ## When This Occurs
    /// - `add` / `add_range` / `update` received an entity that fails
    ///   domain validation
    ///
    /// This is the uniform invalid-argument path: every mutation validates,
    /// not just single-entity add.
    #[error("Invalid entity: {0}")]
    Invalid(#[from] ValidationError),

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Committing an insert whose id already exists
    /// - Any UNIQUE index violation
    #[error("Duplicate {field}: already exists")]
    UniqueViolation { field: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Committing an order referencing a non-existent customer
    /// - Committing an order line referencing a non-existent order/product
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Transaction failed to open or commit.
    ///
    /// A failed flush rolls the whole staged batch back; nothing is
    /// partially applied.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database      → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut  → StoreError::PoolExhausted
/// sqlx::Error::PoolClosed    → StoreError::ConnectionFailed
/// Other                      → StoreError::Internal
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite error messages for constraints:
                // UNIQUE constraint: "UNIQUE constraint failed: <table>.<column>"
                // FK constraint: "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    StoreError::UniqueViolation { field }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    StoreError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    StoreError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => StoreError::PoolExhausted,

            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("Pool is closed".to_string()),

            _ => StoreError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts_to_invalid() {
        let validation_err = ValidationError::Required {
            field: "surname".to_string(),
        };
        let store_err: StoreError = validation_err.into();
        assert!(matches!(store_err, StoreError::Invalid(_)));
        assert_eq!(store_err.to_string(), "Invalid entity: surname is required");
    }

    #[test]
    fn test_transaction_failure_message() {
        let err = StoreError::TransactionFailed("database is locked".to_string());
        assert_eq!(err.to_string(), "Transaction failed: database is locked");
    }
}
