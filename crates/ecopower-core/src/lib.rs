//! # ecopower-core: Pure Domain Types for EcoPower Logistics
//!
//! This crate contains the domain model shared by every other crate in the
//! workspace. Everything in here is pure: no database, no network, no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  EcoPower Logistics Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Calling Layer (per request)                     │   │
//! │  │      creates a StoreContext, uses repositories, commits         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ecopower-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────────────────┐    │   │
//! │  │   │   types   │  │   money   │  │       validation        │    │   │
//! │  │   │ Customer  │  │   Money   │  │  names, prices, ids,    │    │   │
//! │  │   │ Order ... │  │  (cents)  │  │  quantities, discounts  │    │   │
//! │  │   └───────────┘  └───────────┘  └─────────────────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ecopower-store (Persistence Layer)              │   │
//! │  │          SQLite pool, migrations, repositories, unit of work    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (Customer, Order, OrderDetail, Product, Service)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use ecopower_core::money::Money;
//! use ecopower_core::types::Product;
//!
//! let product = Product {
//!     id: 1,
//!     name: "Solar Panel 450W".to_string(),
//!     description: None,
//!     unit_price_cents: 129_99,
//!     units_in_stock: 40,
//! };
//!
//! assert!(product.validate().is_ok());
//! assert_eq!(product.unit_price(), Money::from_cents(12999));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ecopower_core::Money` instead of
// `use ecopower_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single product on one order line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Can be made configurable per depot in future versions.
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum length for customer and product names.
///
/// ## Business Reason
/// Matches the column widths of the backing store; anything longer is
/// almost certainly pasted garbage.
pub const MAX_NAME_LEN: usize = 200;
