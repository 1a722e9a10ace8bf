//! # Products Repository
//!
//! `Repository<Product>` plus catalogue queries.
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Product Search Works                             │
//! │                                                                         │
//! │  User types: "panel"                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LIKE '%panel%' over products.name (idx_products_name)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Solar Panel 450W  ← MATCH                                             │
//! │  Solar Panel 550W  ← MATCH                                             │
//! │  Inverter 5kW                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Results ordered by name, capped at the caller's limit                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use ecopower_core::Product;
use tracing::debug;

use crate::entity::select_sql;
use crate::error::StoreResult;
use crate::repository::Repository;

/// Repository for product database operations.
pub type ProductsRepository = Repository<Product>;

impl Repository<Product> {
    /// Searches products by name fragment.
    ///
    /// ## Arguments
    /// * `query` - Search term (can be partial). Empty returns the first
    ///   `limit` products by name.
    /// * `limit` - Maximum results to return
    pub async fn search(&self, query: &str, limit: u32) -> StoreResult<Vec<Product>> {
        let query = query.trim();

        debug!(query = %query, limit = %limit, "Searching products");

        let sql = format!(
            "{} WHERE name LIKE ? ORDER BY name LIMIT ?",
            select_sql::<Product>()
        );
        let pattern = format!("%{query}%");

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(pattern)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Lists products with at least one unit in stock, ordered by name.
    pub async fn in_stock(&self) -> StoreResult<Vec<Product>> {
        let sql = format!(
            "{} WHERE units_in_stock > 0 ORDER BY name",
            select_sql::<Product>()
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Store, StoreConfig};
    use ecopower_core::Product;

    fn product(id: i64, name: &str, stock: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            unit_price_cents: 12_999,
            units_in_stock: stock,
        }
    }

    #[tokio::test]
    async fn test_search_matches_name_fragment() {
        let ctx = Store::new(StoreConfig::in_memory())
            .await
            .unwrap()
            .context();

        ctx.products()
            .add_range(&[
                product(1, "Solar Panel 450W", 40),
                product(2, "Solar Panel 550W", 0),
                product(3, "Inverter 5kW", 12),
            ])
            .unwrap();
        ctx.save_changes().await.unwrap();

        let panels = ctx.products().search("panel", 20).await.unwrap();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].name, "Solar Panel 450W");

        // Limit caps the result set
        let one = ctx.products().search("panel", 1).await.unwrap();
        assert_eq!(one.len(), 1);

        // Empty query returns everything up to the limit
        let all = ctx.products().search("", 20).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_in_stock_excludes_empty_shelves() {
        let ctx = Store::new(StoreConfig::in_memory())
            .await
            .unwrap()
            .context();

        ctx.products()
            .add_range(&[
                product(1, "Solar Panel 450W", 40),
                product(2, "Solar Panel 550W", 0),
            ])
            .unwrap();
        ctx.save_changes().await.unwrap();

        let stocked = ctx.products().in_stock().await.unwrap();
        assert_eq!(stocked.len(), 1);
        assert_eq!(stocked[0].id, 1);
    }
}
