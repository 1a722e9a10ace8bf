//! # Generic Repository
//!
//! One repository implementation for every entity type.
//!
//! ## Why Generic?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 One Component, Five Entities                            │
//! │                                                                         │
//! │  The capability set is identical for every entity:                     │
//! │                                                                         │
//! │    get_by_id  get_all  find  add  add_range                            │
//! │    remove  remove_range  update  exists  count                         │
//! │                                                                         │
//! │  so there is exactly one implementation, Repository<E>, driven by      │
//! │  the Entity metadata (table, columns, bind values). The per-entity     │
//! │  names are aliases:                                                    │
//! │                                                                         │
//! │    CustomersRepository    = Repository<Customer>                       │
//! │    OrdersRepository       = Repository<Order>                          │
//! │    OrderDetailsRepository = Repository<OrderDetail>                    │
//! │    ProductsRepository     = Repository<Product>                        │
//! │    ServiceRepository      = Repository<Service>                        │
//! │                                                                         │
//! │  Entity-specific queries live as inherent impls on the alias target    │
//! │  (e.g. Repository<Order>::for_customer) in the sibling modules.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation Semantics
//! Mutations never touch the database directly. `add`, `add_range`,
//! `remove`, `remove_range` and `update` validate and then stage into the
//! owning context's change tracker; the caller commits the whole batch with
//! [`StoreContext::save_changes`](crate::context::StoreContext::save_changes).

use std::marker::PhantomData;
use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::debug;

use crate::context::{ChangeTracker, StagedChange};
use crate::entity::{select_sql, Entity};
use crate::error::StoreResult;
use ecopower_core::validation::validate_entity_id;

/// Repository for one entity type, bound to one unit of work.
///
/// Obtained from a [`StoreContext`](crate::context::StoreContext) accessor;
/// reads go straight to the pool, mutations stage into the context's
/// tracker.
///
/// ## Usage
/// ```rust,ignore
/// let ctx = store.context();
/// let repo = ctx.products();
///
/// let all = repo.get_all().await?;
/// repo.add(&product)?;          // staged, not yet persisted
/// ctx.save_changes().await?;    // now persisted
/// ```
#[derive(Debug, Clone)]
pub struct Repository<E: Entity> {
    pub(crate) pool: SqlitePool,
    pub(crate) tracker: Arc<ChangeTracker>,
    _entity: PhantomData<E>,
}

impl<E: Entity> Repository<E> {
    pub(crate) fn new(pool: SqlitePool, tracker: Arc<ChangeTracker>) -> Self {
        Repository {
            pool,
            tracker,
            _entity: PhantomData,
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Gets an entity by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(entity))` - row found
    /// * `Ok(None)` - no such row; a miss is never an error
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<E>> {
        let sql = format!("{} WHERE {} = ?", select_sql::<E>(), E::COLUMNS[0]);

        let entity = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(entity)
    }

    /// Gets all entities, materialized as a Vec.
    ///
    /// The suspension point is exactly the store round-trip; there is no
    /// cancellation or timeout handling beyond the pool's acquire timeout.
    pub async fn get_all(&self) -> StoreResult<Vec<E>> {
        let sql = format!("{} ORDER BY {}", select_sql::<E>(), E::COLUMNS[0]);

        let entities = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;

        debug!(entity = E::NAME, count = entities.len(), "Fetched all");
        Ok(entities)
    }

    /// Finds all entities satisfying a caller-supplied predicate.
    ///
    /// The predicate runs over the entity's fields in memory, so it can be
    /// any Rust closure; the result equals `get_all()` filtered by it.
    pub async fn find<P>(&self, mut predicate: P) -> StoreResult<Vec<E>>
    where
        P: FnMut(&E) -> bool,
    {
        let mut entities = self.get_all().await?;
        entities.retain(|entity| predicate(entity));
        Ok(entities)
    }

    /// Checks whether a row with this id exists.
    pub async fn exists(&self, id: i64) -> StoreResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?)",
            E::TABLE,
            E::COLUMNS[0]
        );

        let found: i64 = sqlx::query_scalar(&sql).bind(id).fetch_one(&self.pool).await?;

        Ok(found != 0)
    }

    /// Counts all rows (for diagnostics).
    pub async fn count(&self) -> StoreResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);

        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;

        Ok(count)
    }

    // -------------------------------------------------------------------------
    // Mutations (staged)
    // -------------------------------------------------------------------------
    // Uniform policy: everything that binds entity fields validates the
    // entity first; everything is rejected before staging or staged whole.

    /// Stages a new entity for insertion.
    ///
    /// ## Errors
    /// `StoreError::Invalid` if the entity fails domain validation; nothing
    /// is staged in that case.
    pub fn add(&self, entity: &E) -> StoreResult<()> {
        entity.validate()?;

        debug!(entity = E::NAME, id = entity.id(), "Staging insert");
        self.tracker.stage(StagedChange::insert(entity));
        Ok(())
    }

    /// Stages multiple entities for insertion.
    ///
    /// Every entity is validated before any is staged: an invalid element
    /// rejects the whole slice and stages nothing. An empty slice is a
    /// no-op, not an error.
    pub fn add_range(&self, entities: &[E]) -> StoreResult<()> {
        for entity in entities {
            entity.validate()?;
        }

        if entities.is_empty() {
            return Ok(());
        }

        debug!(entity = E::NAME, count = entities.len(), "Staging inserts");
        self.tracker
            .stage_all(entities.iter().map(StagedChange::insert).collect());
        Ok(())
    }

    /// Stages an entity for deletion, addressed by its id.
    ///
    /// Deleting a row that does not exist affects zero rows at flush and is
    /// not an error.
    pub fn remove(&self, entity: &E) -> StoreResult<()> {
        validate_entity_id(entity.id())?;

        debug!(entity = E::NAME, id = entity.id(), "Staging delete");
        self.tracker.stage(StagedChange::delete(entity));
        Ok(())
    }

    /// Stages multiple deletions. An empty slice is a no-op.
    pub fn remove_range(&self, entities: &[E]) -> StoreResult<()> {
        for entity in entities {
            validate_entity_id(entity.id())?;
        }

        if entities.is_empty() {
            return Ok(());
        }

        debug!(entity = E::NAME, count = entities.len(), "Staging deletes");
        self.tracker
            .stage_all(entities.iter().map(StagedChange::delete).collect());
        Ok(())
    }

    /// Stages an update, addressed by the entity's id.
    ///
    /// Updating a row that does not exist affects zero rows at flush and is
    /// not an error - a never-persisted entity is silently ignored.
    pub fn update(&self, entity: &E) -> StoreResult<()> {
        entity.validate()?;

        debug!(entity = E::NAME, id = entity.id(), "Staging update");
        self.tracker.stage(StagedChange::update(entity));
        Ok(())
    }
}

// =============================================================================
// Shared Repository Suite
// =============================================================================
// One behavioral contract, instantiated per entity type. Each instantiation
// supplies a sample factory, an invalid sample, a mutation, and a fixture
// that seeds foreign-key parents.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use ecopower_core::{Customer, Order, OrderDetail, Product, Service};

    use crate::context::StoreContext;
    use crate::entity::Entity;
    use crate::error::StoreError;
    use crate::pool::{Store, StoreConfig};

    async fn test_context() -> StoreContext {
        Store::new(StoreConfig::in_memory())
            .await
            .unwrap()
            .context()
    }

    // -------------------------------------------------------------------------
    // Per-entity factories
    // -------------------------------------------------------------------------

    fn customer(id: i64) -> Customer {
        Customer {
            id,
            title: Some("Ms".to_string()),
            first_name: "Thandi".to_string(),
            surname: "Nkosi".to_string(),
            cell_phone: Some("+27 82 555 0101".to_string()),
        }
    }

    fn invalid_customer() -> Customer {
        Customer {
            surname: "".to_string(),
            ..customer(1)
        }
    }

    fn mutated_customer(mut c: Customer) -> Customer {
        c.surname = "Dlamini".to_string();
        c
    }

    fn product(id: i64) -> Product {
        Product {
            id,
            name: format!("Solar Panel {}W", 100 + id),
            description: None,
            unit_price_cents: 12_999 + id,
            units_in_stock: 40,
        }
    }

    fn invalid_product() -> Product {
        Product {
            unit_price_cents: -1,
            ..product(1)
        }
    }

    fn mutated_product(mut p: Product) -> Product {
        p.units_in_stock = 7;
        p
    }

    fn service(id: i64) -> Service {
        Service {
            id,
            name: format!("Installation tier {id}"),
            description: Some("On-site installation".to_string()),
            rate_cents: 45_000,
        }
    }

    fn invalid_service() -> Service {
        Service {
            name: "   ".to_string(),
            ..service(1)
        }
    }

    fn mutated_service(mut s: Service) -> Service {
        s.rate_cents = 52_500;
        s
    }

    fn order(id: i64) -> Order {
        Order {
            id,
            customer_id: 1,
            order_date: Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap(),
            delivery_address: "14 Baobab Road, Midrand".to_string(),
        }
    }

    fn invalid_order() -> Order {
        Order {
            delivery_address: "".to_string(),
            ..order(1)
        }
    }

    fn mutated_order(mut o: Order) -> Order {
        o.delivery_address = "2 Protea Close, Soweto".to_string();
        o
    }

    fn order_detail(id: i64) -> OrderDetail {
        OrderDetail {
            id,
            order_id: 1,
            product_id: 1,
            quantity: 3,
            discount_bps: 250,
        }
    }

    fn invalid_order_detail() -> OrderDetail {
        OrderDetail {
            quantity: 0,
            ..order_detail(1)
        }
    }

    fn mutated_order_detail(mut d: OrderDetail) -> OrderDetail {
        d.quantity = 9;
        d
    }

    // -------------------------------------------------------------------------
    // Fixtures: seed foreign-key parents where the entity needs them
    // -------------------------------------------------------------------------

    async fn no_fixture(_ctx: &StoreContext) {}

    async fn order_fixture(ctx: &StoreContext) {
        ctx.customers().add(&customer(1)).unwrap();
        ctx.save_changes().await.unwrap();
    }

    async fn order_detail_fixture(ctx: &StoreContext) {
        ctx.customers().add(&customer(1)).unwrap();
        ctx.orders().add(&order(1)).unwrap();
        ctx.products().add(&product(1)).unwrap();
        ctx.save_changes().await.unwrap();
    }

    // -------------------------------------------------------------------------
    // The shared suite
    // -------------------------------------------------------------------------

    macro_rules! repository_suite {
        (
            $module:ident, $entity:ty, $accessor:ident,
            $sample:ident, $invalid:ident, $mutate:ident, $fixture:ident
        ) => {
            mod $module {
                use super::*;

                #[tokio::test]
                async fn add_then_get_by_id_returns_entity() {
                    let ctx = test_context().await;
                    $fixture(&ctx).await;

                    let entity = $sample(10);
                    ctx.$accessor().add(&entity).unwrap();
                    ctx.save_changes().await.unwrap();

                    let found = ctx.$accessor().get_by_id(10).await.unwrap();
                    assert_eq!(found, Some(entity));
                }

                #[tokio::test]
                async fn get_by_id_miss_returns_none() {
                    let ctx = test_context().await;

                    let found = ctx.$accessor().get_by_id(999).await.unwrap();
                    assert!(found.is_none());
                }

                #[tokio::test]
                async fn remove_then_get_by_id_returns_none() {
                    let ctx = test_context().await;
                    $fixture(&ctx).await;

                    let entity = $sample(10);
                    ctx.$accessor().add(&entity).unwrap();
                    ctx.save_changes().await.unwrap();
                    assert!(ctx.$accessor().get_by_id(10).await.unwrap().is_some());

                    ctx.$accessor().remove(&entity).unwrap();
                    ctx.save_changes().await.unwrap();
                    assert!(ctx.$accessor().get_by_id(10).await.unwrap().is_none());
                }

                #[tokio::test]
                async fn find_equals_filtered_get_all() {
                    let ctx = test_context().await;
                    $fixture(&ctx).await;

                    ctx.$accessor()
                        .add_range(&[$sample(10), $sample(11), $sample(12)])
                        .unwrap();
                    ctx.save_changes().await.unwrap();

                    let found = ctx
                        .$accessor()
                        .find(|e: &$entity| Entity::id(e) >= 11)
                        .await
                        .unwrap();
                    let expected: Vec<$entity> = ctx
                        .$accessor()
                        .get_all()
                        .await
                        .unwrap()
                        .into_iter()
                        .filter(|e| Entity::id(e) >= 11)
                        .collect();

                    assert_eq!(found.len(), 2);
                    assert_eq!(found, expected);
                }

                #[tokio::test]
                async fn empty_ranges_are_noops() {
                    let ctx = test_context().await;

                    ctx.$accessor().add_range(&[]).unwrap();
                    ctx.$accessor().remove_range(&[]).unwrap();

                    assert!(!ctx.has_pending_changes());
                    assert_eq!(ctx.save_changes().await.unwrap(), 0);
                }

                #[tokio::test]
                async fn add_rejects_invalid_entity() {
                    let ctx = test_context().await;

                    let err = ctx.$accessor().add(&$invalid()).unwrap_err();
                    assert!(matches!(err, StoreError::Invalid(_)));
                    assert!(!ctx.has_pending_changes());
                }

                #[tokio::test]
                async fn add_range_rejects_whole_slice_on_one_invalid() {
                    let ctx = test_context().await;

                    let err = ctx
                        .$accessor()
                        .add_range(&[$sample(10), $invalid()])
                        .unwrap_err();
                    assert!(matches!(err, StoreError::Invalid(_)));
                    // Nothing staged, not even the valid element
                    assert!(!ctx.has_pending_changes());
                }

                #[tokio::test]
                async fn update_non_persisted_entity_is_noop() {
                    let ctx = test_context().await;
                    $fixture(&ctx).await;

                    ctx.$accessor().update(&$sample(77)).unwrap();
                    assert_eq!(ctx.save_changes().await.unwrap(), 0);
                    assert!(ctx.$accessor().get_by_id(77).await.unwrap().is_none());
                }

                #[tokio::test]
                async fn update_persisted_entity_applies() {
                    let ctx = test_context().await;
                    $fixture(&ctx).await;

                    ctx.$accessor().add(&$sample(10)).unwrap();
                    ctx.save_changes().await.unwrap();

                    let changed = $mutate($sample(10));
                    ctx.$accessor().update(&changed).unwrap();
                    ctx.save_changes().await.unwrap();

                    let found = ctx.$accessor().get_by_id(10).await.unwrap();
                    assert_eq!(found, Some(changed));
                }

                #[tokio::test]
                async fn remove_range_removes_all() {
                    let ctx = test_context().await;
                    $fixture(&ctx).await;

                    let batch = vec![$sample(10), $sample(11), $sample(12)];
                    ctx.$accessor().add_range(&batch).unwrap();
                    ctx.save_changes().await.unwrap();

                    ctx.$accessor().remove_range(&batch).unwrap();
                    ctx.save_changes().await.unwrap();

                    assert_eq!(ctx.$accessor().count().await.unwrap(), 0);
                }

                #[tokio::test]
                async fn exists_and_count_reflect_commits() {
                    let ctx = test_context().await;
                    $fixture(&ctx).await;

                    assert_eq!(ctx.$accessor().count().await.unwrap(), 0);
                    assert!(!ctx.$accessor().exists(10).await.unwrap());

                    ctx.$accessor().add(&$sample(10)).unwrap();
                    ctx.save_changes().await.unwrap();

                    assert!(ctx.$accessor().exists(10).await.unwrap());
                    assert_eq!(ctx.$accessor().count().await.unwrap(), 1);
                }
            }
        };
    }

    repository_suite!(
        customers_suite,
        Customer,
        customers,
        customer,
        invalid_customer,
        mutated_customer,
        no_fixture
    );
    repository_suite!(
        products_suite,
        Product,
        products,
        product,
        invalid_product,
        mutated_product,
        no_fixture
    );
    repository_suite!(
        services_suite,
        Service,
        services,
        service,
        invalid_service,
        mutated_service,
        no_fixture
    );
    repository_suite!(
        orders_suite,
        Order,
        orders,
        order,
        invalid_order,
        mutated_order,
        order_fixture
    );
    repository_suite!(
        order_details_suite,
        OrderDetail,
        order_details,
        order_detail,
        invalid_order_detail,
        mutated_order_detail,
        order_detail_fixture
    );
}
