//! # Services Repository
//!
//! `Repository<Service>` plus catalogue queries.

use ecopower_core::Service;
use tracing::debug;

use crate::entity::select_sql;
use crate::error::StoreResult;
use crate::repository::Repository;

/// Repository for service database operations.
pub type ServiceRepository = Repository<Service>;

impl Repository<Service> {
    /// Searches services by name fragment, ordered by name.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<Service>> {
        let query = query.trim();

        debug!(query = %query, "Searching services");

        let sql = format!(
            "{} WHERE name LIKE ? ORDER BY name",
            select_sql::<Service>()
        );
        let pattern = format!("%{query}%");

        let services = sqlx::query_as::<_, Service>(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(services)
    }
}
