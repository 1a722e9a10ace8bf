//! # Order Details Repository
//!
//! `Repository<OrderDetail>` plus per-order line views.

use ecopower_core::OrderDetail;
use tracing::debug;

use crate::entity::select_sql;
use crate::error::StoreResult;
use crate::repository::Repository;

/// Repository for order line database operations.
pub type OrderDetailsRepository = Repository<OrderDetail>;

impl Repository<OrderDetail> {
    /// Gets all lines on one order, in line-id order.
    pub async fn for_order(&self, order_id: i64) -> StoreResult<Vec<OrderDetail>> {
        debug!(order_id, "Fetching lines for order");

        let sql = format!(
            "{} WHERE order_id = ? ORDER BY id",
            select_sql::<OrderDetail>()
        );

        let lines = sqlx::query_as::<_, OrderDetail>(&sql)
            .bind(order_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(lines)
    }

    /// Total units across every line of one order.
    pub async fn total_quantity_for_order(&self, order_id: i64) -> StoreResult<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(quantity), 0) FROM order_details WHERE order_id = ?",
        )
        .bind(order_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use ecopower_core::{Customer, Order, OrderDetail, Product};

    use crate::context::StoreContext;
    use crate::pool::{Store, StoreConfig};

    async fn seeded_context() -> StoreContext {
        let ctx = Store::new(StoreConfig::in_memory())
            .await
            .unwrap()
            .context();

        ctx.customers()
            .add(&Customer {
                id: 1,
                title: None,
                first_name: "Thandi".to_string(),
                surname: "Nkosi".to_string(),
                cell_phone: None,
            })
            .unwrap();
        ctx.orders()
            .add_range(&[
                Order {
                    id: 1,
                    customer_id: 1,
                    order_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
                    delivery_address: "14 Baobab Road, Midrand".to_string(),
                },
                Order {
                    id: 2,
                    customer_id: 1,
                    order_date: Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
                    delivery_address: "14 Baobab Road, Midrand".to_string(),
                },
            ])
            .unwrap();
        ctx.products()
            .add(&Product {
                id: 1,
                name: "Solar Panel 450W".to_string(),
                description: None,
                unit_price_cents: 12_999,
                units_in_stock: 40,
            })
            .unwrap();
        ctx.save_changes().await.unwrap();

        ctx
    }

    fn line(id: i64, order_id: i64, quantity: i64) -> OrderDetail {
        OrderDetail {
            id,
            order_id,
            product_id: 1,
            quantity,
            discount_bps: 0,
        }
    }

    #[tokio::test]
    async fn test_for_order_and_total_quantity() {
        let ctx = seeded_context().await;

        ctx.order_details()
            .add_range(&[line(1, 1, 3), line(2, 1, 5), line(3, 2, 7)])
            .unwrap();
        ctx.save_changes().await.unwrap();

        let lines = ctx.order_details().for_order(1).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].id, 1);

        assert_eq!(
            ctx.order_details().total_quantity_for_order(1).await.unwrap(),
            8
        );
        assert_eq!(
            ctx.order_details().total_quantity_for_order(2).await.unwrap(),
            7
        );
        // Order with no lines sums to zero
        assert_eq!(
            ctx.order_details().total_quantity_for_order(9).await.unwrap(),
            0
        );
    }
}
