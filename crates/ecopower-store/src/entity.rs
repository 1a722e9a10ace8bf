//! # Entity Mapping
//!
//! The seam between the pure domain types and the store: one trait that tells
//! the generic repository how an entity maps onto its table.
//!
//! ## How The Mapping Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Entity Trait Responsibilities                       │
//! │                                                                         │
//! │  Customer (ecopower-core)                                              │
//! │       │                                                                 │
//! │       │  impl Entity for Customer (this module)                         │
//! │       ▼                                                                 │
//! │  TABLE    = "customers"                                                │
//! │  COLUMNS  = ["id", "title", "first_name", "surname", "cell_phone"]     │
//! │  id()     → 17                                                         │
//! │  values() → [Integer(17), Null, Text("Thandi"), Text("Nkosi"), ...]    │
//! │  validate() → delegates to Customer::validate                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Repository<Customer> composes SELECT/INSERT/UPDATE/DELETE from the    │
//! │  metadata; reads come back through sqlx::FromRow                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adding an entity type means one struct in ecopower-core, one `impl Entity`
//! here, and one migration - the repository comes for free.

use ecopower_core::error::ValidationResult;
use ecopower_core::{Customer, Order, OrderDetail, Product, Service};
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

use crate::value::SqlValue;

// =============================================================================
// Entity Trait
// =============================================================================

/// A record type the store can persist.
///
/// ## Contract
/// - `COLUMNS[0]` is always the id column; `values()[0]` is always the id
/// - `values()` returns exactly one value per column, in `COLUMNS` order
/// - `validate()` holds the uniform validate-and-reject policy: every
///   mutation path (add, add_range, update) calls it before staging
pub trait Entity:
    Clone + Send + Sync + Unpin + for<'r> FromRow<'r, SqliteRow> + 'static
{
    /// Human-readable entity name for logs and errors.
    const NAME: &'static str;

    /// Backing table name.
    const TABLE: &'static str;

    /// Column names, id first.
    const COLUMNS: &'static [&'static str];

    /// The identity addressing exactly one row of [`Entity::TABLE`].
    fn id(&self) -> i64;

    /// Renders the entity into owned bind values, one per column.
    fn values(&self) -> Vec<SqlValue>;

    /// Checks the entity against the domain rules.
    fn validate(&self) -> ValidationResult<()>;
}

// =============================================================================
// Statement Builders
// =============================================================================

/// `SELECT <columns> FROM <table>` without a WHERE clause.
pub(crate) fn select_sql<E: Entity>() -> String {
    format!("SELECT {} FROM {}", E::COLUMNS.join(", "), E::TABLE)
}

/// `INSERT INTO <table> (<columns>) VALUES (?, ...)`.
pub(crate) fn insert_sql<E: Entity>() -> String {
    let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders
    )
}

/// `UPDATE <table> SET <non-id columns> WHERE id = ?`.
pub(crate) fn update_sql<E: Entity>() -> String {
    let assignments = E::COLUMNS[1..]
        .iter()
        .map(|col| format!("{col} = ?"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE {} = ?",
        E::TABLE,
        assignments,
        E::COLUMNS[0]
    )
}

/// `DELETE FROM <table> WHERE id = ?`.
pub(crate) fn delete_sql<E: Entity>() -> String {
    format!("DELETE FROM {} WHERE {} = ?", E::TABLE, E::COLUMNS[0])
}

// =============================================================================
// Entity Implementations
// =============================================================================

impl Entity for Customer {
    const NAME: &'static str = "Customer";
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] =
        &["id", "title", "first_name", "surname", "cell_phone"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.title.clone().into(),
            self.first_name.clone().into(),
            self.surname.clone().into(),
            self.cell_phone.clone().into(),
        ]
    }

    fn validate(&self) -> ValidationResult<()> {
        Customer::validate(self)
    }
}

impl Entity for Product {
    const NAME: &'static str = "Product";
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "unit_price_cents",
        "units_in_stock",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.name.clone().into(),
            self.description.clone().into(),
            self.unit_price_cents.into(),
            self.units_in_stock.into(),
        ]
    }

    fn validate(&self) -> ValidationResult<()> {
        Product::validate(self)
    }
}

impl Entity for Service {
    const NAME: &'static str = "Service";
    const TABLE: &'static str = "services";
    const COLUMNS: &'static [&'static str] = &["id", "name", "description", "rate_cents"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.name.clone().into(),
            self.description.clone().into(),
            self.rate_cents.into(),
        ]
    }

    fn validate(&self) -> ValidationResult<()> {
        Service::validate(self)
    }
}

impl Entity for Order {
    const NAME: &'static str = "Order";
    const TABLE: &'static str = "orders";
    const COLUMNS: &'static [&'static str] =
        &["id", "customer_id", "order_date", "delivery_address"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.customer_id.into(),
            self.order_date.into(),
            self.delivery_address.clone().into(),
        ]
    }

    fn validate(&self) -> ValidationResult<()> {
        Order::validate(self)
    }
}

impl Entity for OrderDetail {
    const NAME: &'static str = "OrderDetail";
    const TABLE: &'static str = "order_details";
    const COLUMNS: &'static [&'static str] =
        &["id", "order_id", "product_id", "quantity", "discount_bps"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.order_id.into(),
            self.product_id.into(),
            self.quantity.into(),
            self.discount_bps.into(),
        ]
    }

    fn validate(&self) -> ValidationResult<()> {
        OrderDetail::validate(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_builders_for_customer() {
        assert_eq!(
            select_sql::<Customer>(),
            "SELECT id, title, first_name, surname, cell_phone FROM customers"
        );
        assert_eq!(
            insert_sql::<Customer>(),
            "INSERT INTO customers (id, title, first_name, surname, cell_phone) \
             VALUES (?, ?, ?, ?, ?)"
        );
        assert_eq!(
            update_sql::<Customer>(),
            "UPDATE customers SET title = ?, first_name = ?, surname = ?, \
             cell_phone = ? WHERE id = ?"
        );
        assert_eq!(delete_sql::<Customer>(), "DELETE FROM customers WHERE id = ?");
    }

    #[test]
    fn test_values_match_columns() {
        // The flush binds values()[i] to COLUMNS[i]; a mismatch here would
        // silently shift every column one place over.
        let customer = Customer {
            id: 1,
            title: None,
            first_name: "Thandi".to_string(),
            surname: "Nkosi".to_string(),
            cell_phone: None,
        };
        assert_eq!(customer.values().len(), Customer::COLUMNS.len());
        assert_eq!(customer.values()[0], SqlValue::Integer(1));

        let line = OrderDetail {
            id: 9,
            order_id: 2,
            product_id: 3,
            quantity: 4,
            discount_bps: 250,
        };
        assert_eq!(line.values().len(), OrderDetail::COLUMNS.len());
        assert_eq!(line.values()[0], SqlValue::Integer(9));
        assert_eq!(line.values()[4], SqlValue::Integer(250));
    }

    #[test]
    fn test_id_column_is_first() {
        assert_eq!(Customer::COLUMNS[0], "id");
        assert_eq!(Product::COLUMNS[0], "id");
        assert_eq!(Service::COLUMNS[0], "id");
        assert_eq!(Order::COLUMNS[0], "id");
        assert_eq!(OrderDetail::COLUMNS[0], "id");
    }
}
