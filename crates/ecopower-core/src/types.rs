//! # Entity Types
//!
//! The five entity types persisted by EcoPower Logistics.
//!
//! ## Entity Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Entity Relationships                             │
//! │                                                                         │
//! │  ┌─────────────┐ 1      n ┌─────────────┐ 1      n ┌───────────────┐   │
//! │  │  Customer   │──────────│    Order    │──────────│  OrderDetail  │   │
//! │  │ ─────────── │          │ ─────────── │          │ ───────────── │   │
//! │  │ id (i64)    │          │ id (i64)    │          │ id (i64)      │   │
//! │  │ first_name  │          │ customer_id │          │ order_id      │   │
//! │  │ surname     │          │ order_date  │          │ product_id ───┼─┐ │
//! │  │ cell_phone  │          │ delivery_.. │          │ quantity      │ │ │
//! │  └─────────────┘          └─────────────┘          │ discount_bps  │ │ │
//! │                                                    └───────────────┘ │ │
//! │  ┌─────────────┐          ┌─────────────┐                            │ │
//! │  │   Service   │          │   Product   │◄───────────────────────────┘ │
//! │  │ ─────────── │          │ ─────────── │                              │
//! │  │ id (i64)    │          │ id (i64)    │                              │
//! │  │ name        │          │ name        │                              │
//! │  │ rate_cents  │          │ unit_price..│                              │
//! │  └─────────────┘          └─────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity carries a positive `i64` id that uniquely addresses one row
//! in its table. Ids are assigned by the caller before staging an insert;
//! referential integrity between tables is enforced by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::money::Money;
use crate::validation::{
    validate_cell_phone, validate_discount_bps, validate_entity_id, validate_name,
    validate_price_cents, validate_quantity,
};

// =============================================================================
// Customer
// =============================================================================

/// A customer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Unique identifier.
    pub id: i64,

    /// Salutation (Mr, Ms, Dr, ...). Optional.
    pub title: Option<String>,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub surname: String,

    /// Contact number. Optional.
    pub cell_phone: Option<String>,
}

impl Customer {
    /// Checks the customer against the domain rules.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_entity_id(self.id)?;
        validate_name("first_name", &self.first_name)?;
        validate_name("surname", &self.surname)?;
        if let Some(phone) = &self.cell_phone {
            validate_cell_phone(phone)?;
        }
        Ok(())
    }

    /// Returns "Surname, First" for listings.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.surname, self.first_name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A physical product held in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier.
    pub id: i64,

    /// Display name shown in catalogues and on invoices.
    pub name: String,

    /// Optional long description.
    pub description: Option<String>,

    /// Price per unit in cents (smallest currency unit).
    pub unit_price_cents: i64,

    /// Units currently in stock. May legitimately be zero.
    pub units_in_stock: i64,
}

impl Product {
    /// Checks the product against the domain rules.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_entity_id(self.id)?;
        validate_name("name", &self.name)?;
        validate_price_cents("unit_price", self.unit_price_cents)?;
        Ok(())
    }

    /// Returns the unit price as a Money value.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Checks whether the requested quantity can be fulfilled from stock.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        self.units_in_stock >= quantity
    }
}

// =============================================================================
// Service
// =============================================================================

/// A billable service (installation, maintenance, consultation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Service {
    /// Unique identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Optional long description.
    pub description: Option<String>,

    /// Rate per engagement in cents.
    pub rate_cents: i64,
}

impl Service {
    /// Checks the service against the domain rules.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_entity_id(self.id)?;
        validate_name("name", &self.name)?;
        validate_price_cents("rate", self.rate_cents)?;
        Ok(())
    }

    /// Returns the rate as a Money value.
    #[inline]
    pub fn rate(&self) -> Money {
        Money::from_cents(self.rate_cents)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order placed by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    /// Unique identifier.
    pub id: i64,

    /// Owning customer. Must reference an existing customer row.
    pub customer_id: i64,

    /// When the order was placed.
    pub order_date: DateTime<Utc>,

    /// Where the order ships to.
    pub delivery_address: String,
}

impl Order {
    /// Checks the order against the domain rules.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_entity_id(self.id)?;
        validate_entity_id(self.customer_id)?;
        validate_name("delivery_address", &self.delivery_address)?;
        Ok(())
    }
}

// =============================================================================
// Order Detail
// =============================================================================

/// One product line on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderDetail {
    /// Unique identifier.
    pub id: i64,

    /// Owning order. Must reference an existing order row.
    pub order_id: i64,

    /// Product being ordered. Must reference an existing product row.
    pub product_id: i64,

    /// Units ordered. 1..=MAX_LINE_QUANTITY.
    pub quantity: i64,

    /// Line discount in basis points (250 = 2.5%). Zero for no discount.
    pub discount_bps: u32,
}

impl OrderDetail {
    /// Checks the order line against the domain rules.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_entity_id(self.id)?;
        validate_entity_id(self.order_id)?;
        validate_entity_id(self.product_id)?;
        validate_quantity(self.quantity)?;
        validate_discount_bps(self.discount_bps)?;
        Ok(())
    }

    /// Computes the line total: unit price × quantity, discount applied.
    ///
    /// ## Example
    /// ```rust
    /// use ecopower_core::money::Money;
    /// use ecopower_core::types::OrderDetail;
    ///
    /// let line = OrderDetail {
    ///     id: 1,
    ///     order_id: 1,
    ///     product_id: 1,
    ///     quantity: 3,
    ///     discount_bps: 1000, // 10% off
    /// };
    ///
    /// let total = line.line_total(Money::from_cents(1000));
    /// assert_eq!(total.cents(), 2700); // 3 × $10.00, minus 10%
    /// ```
    pub fn line_total(&self, unit_price: Money) -> Money {
        (unit_price * self.quantity).apply_discount_bps(self.discount_bps)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_customer() -> Customer {
        Customer {
            id: 1,
            title: Some("Ms".to_string()),
            first_name: "Thandi".to_string(),
            surname: "Nkosi".to_string(),
            cell_phone: Some("+27 82 555 0101".to_string()),
        }
    }

    #[test]
    fn test_customer_validation() {
        assert!(sample_customer().validate().is_ok());

        let mut missing_surname = sample_customer();
        missing_surname.surname = "  ".to_string();
        assert!(missing_surname.validate().is_err());

        let mut bad_phone = sample_customer();
        bad_phone.cell_phone = Some("call me maybe".to_string());
        assert!(bad_phone.validate().is_err());

        let mut bad_id = sample_customer();
        bad_id.id = 0;
        assert!(bad_id.validate().is_err());
    }

    #[test]
    fn test_customer_display_name() {
        assert_eq!(sample_customer().display_name(), "Nkosi, Thandi");
    }

    #[test]
    fn test_product_validation_and_price() {
        let product = Product {
            id: 7,
            name: "Inverter 5kW".to_string(),
            description: None,
            unit_price_cents: 899_00,
            units_in_stock: 12,
        };
        assert!(product.validate().is_ok());
        assert_eq!(product.unit_price(), Money::from_cents(89_900));
        assert!(product.can_fulfill(12));
        assert!(!product.can_fulfill(13));

        let negative_price = Product {
            unit_price_cents: -1,
            ..product
        };
        assert!(negative_price.validate().is_err());
    }

    #[test]
    fn test_order_detail_line_total() {
        let line = OrderDetail {
            id: 1,
            order_id: 1,
            product_id: 1,
            quantity: 4,
            discount_bps: 0,
        };
        assert_eq!(line.line_total(Money::from_cents(2500)).cents(), 10_000);

        let discounted = OrderDetail {
            discount_bps: 2500, // 25% off
            ..line
        };
        assert_eq!(discounted.line_total(Money::from_cents(2500)).cents(), 7_500);
    }

    #[test]
    fn test_order_detail_validation() {
        let line = OrderDetail {
            id: 1,
            order_id: 1,
            product_id: 1,
            quantity: 0,
            discount_bps: 0,
        };
        assert!(line.validate().is_err());

        let over_discounted = OrderDetail {
            quantity: 1,
            discount_bps: 10_001,
            ..line
        };
        assert!(over_discounted.validate().is_err());
    }

    #[test]
    fn test_order_json_round_trip() {
        let order = Order {
            id: 42,
            customer_id: 1,
            order_date: Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap(),
            delivery_address: "14 Baobab Road, Midrand".to_string(),
        };
        assert!(order.validate().is_ok());

        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
