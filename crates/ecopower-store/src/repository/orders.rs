//! # Orders Repository
//!
//! `Repository<Order>` plus order-specific views.

use ecopower_core::Order;
use tracing::debug;

use crate::entity::select_sql;
use crate::error::StoreResult;
use crate::repository::Repository;

/// Repository for order database operations.
pub type OrdersRepository = Repository<Order>;

impl Repository<Order> {
    /// Gets all orders placed by one customer, oldest first.
    pub async fn for_customer(&self, customer_id: i64) -> StoreResult<Vec<Order>> {
        debug!(customer_id, "Fetching orders for customer");

        let sql = format!(
            "{} WHERE customer_id = ? ORDER BY order_date, id",
            select_sql::<Order>()
        );

        let orders = sqlx::query_as::<_, Order>(&sql)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(orders)
    }

    /// Gets the most recently placed orders, newest first.
    pub async fn recent(&self, limit: u32) -> StoreResult<Vec<Order>> {
        let sql = format!(
            "{} ORDER BY order_date DESC, id DESC LIMIT ?",
            select_sql::<Order>()
        );

        let orders = sqlx::query_as::<_, Order>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use ecopower_core::{Customer, Order};

    use crate::pool::{Store, StoreConfig};

    fn customer(id: i64) -> Customer {
        Customer {
            id,
            title: None,
            first_name: "Thandi".to_string(),
            surname: "Nkosi".to_string(),
            cell_phone: None,
        }
    }

    fn order(id: i64, customer_id: i64, day: u32) -> Order {
        Order {
            id,
            customer_id,
            order_date: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
            delivery_address: "14 Baobab Road, Midrand".to_string(),
        }
    }

    #[tokio::test]
    async fn test_for_customer_and_recent() {
        let ctx = Store::new(StoreConfig::in_memory())
            .await
            .unwrap()
            .context();

        ctx.customers()
            .add_range(&[customer(1), customer(2)])
            .unwrap();
        ctx.orders()
            .add_range(&[order(1, 1, 3), order(2, 2, 5), order(3, 1, 8)])
            .unwrap();
        ctx.save_changes().await.unwrap();

        let for_one = ctx.orders().for_customer(1).await.unwrap();
        assert_eq!(for_one.len(), 2);
        // Oldest first
        assert_eq!(for_one[0].id, 1);
        assert_eq!(for_one[1].id, 3);

        let recent = ctx.orders().recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        // Newest first
        assert_eq!(recent[0].id, 3);
        assert_eq!(recent[1].id, 2);
    }
}
