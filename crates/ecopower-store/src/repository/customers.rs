//! # Customers Repository
//!
//! `Repository<Customer>` plus customer-specific lookups.

use ecopower_core::Customer;
use tracing::debug;

use crate::entity::select_sql;
use crate::error::StoreResult;
use crate::repository::Repository;

/// Repository for customer database operations.
pub type CustomersRepository = Repository<Customer>;

impl Repository<Customer> {
    /// Finds customers whose surname contains the given fragment.
    ///
    /// Matching is case-insensitive (SQLite LIKE); results are ordered by
    /// surname, then first name.
    pub async fn find_by_surname(&self, fragment: &str) -> StoreResult<Vec<Customer>> {
        debug!(fragment = %fragment, "Searching customers by surname");

        let sql = format!(
            "{} WHERE surname LIKE ? ORDER BY surname, first_name",
            select_sql::<Customer>()
        );
        let pattern = format!("%{}%", fragment.trim());

        let customers = sqlx::query_as::<_, Customer>(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(customers)
    }
}
