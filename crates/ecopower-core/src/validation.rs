//! # Validation Module
//!
//! Field-level validation rules for EcoPower Logistics entities.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE - domain rule validation                         │
//! │  ├── Runs when a repository stages an entity (add / add_range /        │
//! │  │   update), uniformly for every mutation path                        │
//! │  └── Rejects before anything reaches the change tracker                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── PRIMARY KEY uniqueness                                            │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: the two layers catch different errors               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ecopower_core::validation::{validate_name, validate_quantity};
//!
//! validate_name("surname", "Nkosi").unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_LINE_QUANTITY, MAX_NAME_LEN};

// =============================================================================
// Identity Validators
// =============================================================================

/// Validates an entity identifier.
///
/// ## Rules
/// - Must be positive (ids address exactly one row; zero and negatives are
///   never handed out)
pub fn validate_entity_id(id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required name-like field (names, addresses).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most MAX_NAME_LEN characters
///
/// ## Example
/// ```rust
/// use ecopower_core::validation::validate_name;
///
/// assert!(validate_name("name", "Solar Panel 450W").is_ok());
/// assert!(validate_name("name", "").is_err());
/// assert!(validate_name("name", &"A".repeat(300)).is_err());
/// ```
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a cell phone number.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 20 characters
/// - Digits, spaces, '+', '-' and parentheses only (no strict E.164 parsing;
///   numbers are dialled by humans, not machines)
pub fn validate_cell_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "cell_phone".to_string(),
        });
    }

    if phone.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "cell_phone".to_string(),
            max: 20,
        });
    }

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "cell_phone".to_string(),
            reason: "must contain only digits, spaces, '+', '-' and parentheses".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price or rate in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional items)
///
/// ## Example
/// ```rust
/// use ecopower_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents("unit_price", 1099).is_ok());
/// assert!(validate_price_cents("unit_price", 0).is_ok());
/// assert!(validate_price_cents("unit_price", -100).is_err());
/// ```
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an order line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a discount in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "discount_bps".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
