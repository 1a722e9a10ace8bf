//! # Unit of Work
//!
//! The persistence context: staged mutations, deferred commit.
//!
//! ## How The Unit of Work Flows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Unit-of-Work Lifecycle                               │
//! │                                                                         │
//! │  store.context() ← one StoreContext per request / unit of work         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ctx.customers().add(&customer)?    ─┐                                 │
//! │  ctx.orders().add(&order)?           │  validate, then stage into the  │
//! │  ctx.products().update(&product)?   ─┘  shared ChangeTracker           │
//! │       │                                                                 │
//! │       │   (nothing has touched the database yet)                        │
//! │       ▼                                                                 │
//! │  ctx.save_changes().await?                                             │
//! │       │                                                                 │
//! │       ├── BEGIN                                                        │
//! │       ├── apply staged statements in staging order                     │
//! │       ├── COMMIT          → Ok(rows affected)                          │
//! │       └── any failure     → ROLLBACK, batch discarded, Err(...)        │
//! │                                                                         │
//! │  Reads (get_by_id / get_all / find) always go straight to the store;   │
//! │  staged-but-unflushed mutations are not visible to them.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The context is request-scoped: create one per inbound request, share it
//! across the repositories serving that request, commit (or discard) once.

use std::sync::{Arc, Mutex};

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::entity::{delete_sql, insert_sql, update_sql, Entity};
use crate::error::{StoreError, StoreResult};
use crate::repository::{
    CustomersRepository, OrderDetailsRepository, OrdersRepository, ProductsRepository, Repository,
    ServiceRepository,
};
use crate::value::SqlValue;

// =============================================================================
// Staged Changes
// =============================================================================

/// The kind of mutation a staged change applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// One staged mutation: a rendered statement plus owned bind values.
///
/// Rendering happens at staging time so the change no longer borrows the
/// entity it came from; the flush just binds and executes. Callers never see
/// one; the context only reports how many are pending.
#[derive(Debug, Clone)]
pub(crate) struct StagedChange {
    kind: ChangeKind,
    entity: &'static str,
    entity_id: i64,
    sql: String,
    args: Vec<SqlValue>,
}

impl StagedChange {
    /// Stages an INSERT of `entity`.
    pub(crate) fn insert<E: Entity>(entity: &E) -> Self {
        StagedChange {
            kind: ChangeKind::Insert,
            entity: E::NAME,
            entity_id: entity.id(),
            sql: insert_sql::<E>(),
            args: entity.values(),
        }
    }

    /// Stages an UPDATE of `entity`, addressed by its id.
    pub(crate) fn update<E: Entity>(entity: &E) -> Self {
        // update_sql sets COLUMNS[1..] then filters on the id column, so the
        // id value moves from the front of values() to the back of the args.
        let mut args = entity.values();
        let id = args.remove(0);
        args.push(id);

        StagedChange {
            kind: ChangeKind::Update,
            entity: E::NAME,
            entity_id: entity.id(),
            sql: update_sql::<E>(),
            args,
        }
    }

    /// Stages a DELETE of `entity`, addressed by its id.
    pub(crate) fn delete<E: Entity>(entity: &E) -> Self {
        StagedChange {
            kind: ChangeKind::Delete,
            entity: E::NAME,
            entity_id: entity.id(),
            sql: delete_sql::<E>(),
            args: vec![entity.id().into()],
        }
    }
}

// =============================================================================
// Change Tracker
// =============================================================================

/// Shared queue of staged changes, preserved in staging order.
///
/// The mutex exists only so the context stays `Send` across awaits; staging
/// never suspends and the lock is never held across I/O.
#[derive(Debug, Default)]
pub(crate) struct ChangeTracker {
    staged: Mutex<Vec<StagedChange>>,
}

impl ChangeTracker {
    pub(crate) fn stage(&self, change: StagedChange) {
        self.lock().push(change);
    }

    pub(crate) fn stage_all(&self, changes: Vec<StagedChange>) {
        self.lock().extend(changes);
    }

    fn drain(&self) -> Vec<StagedChange> {
        std::mem::take(&mut *self.lock())
    }

    fn clear(&self) {
        self.lock().clear();
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<StagedChange>> {
        // A poisoned tracker only means another staging call panicked; the
        // queue itself is still well-formed, so recover it.
        match self.staged.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

// =============================================================================
// Store Context
// =============================================================================

/// The persistence context: repositories plus the shared change tracker.
///
/// ## Usage
/// ```rust,ignore
/// let ctx = store.context();
///
/// ctx.customers().add(&customer)?;
/// ctx.orders().add(&order)?;
/// let rows = ctx.save_changes().await?;
/// ```
///
/// Cloning is cheap and clones share the same tracker; a fresh, empty unit
/// of work comes from [`Store::context`](crate::pool::Store::context).
#[derive(Debug, Clone)]
pub struct StoreContext {
    pool: SqlitePool,
    tracker: Arc<ChangeTracker>,
}

impl StoreContext {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        StoreContext {
            pool,
            tracker: Arc::new(ChangeTracker::default()),
        }
    }

    // -------------------------------------------------------------------------
    // Repository Accessors
    // -------------------------------------------------------------------------
    // Every repository handed out here stages into this context's tracker.

    /// Returns the customers repository.
    pub fn customers(&self) -> CustomersRepository {
        Repository::new(self.pool.clone(), Arc::clone(&self.tracker))
    }

    /// Returns the orders repository.
    pub fn orders(&self) -> OrdersRepository {
        Repository::new(self.pool.clone(), Arc::clone(&self.tracker))
    }

    /// Returns the order details repository.
    pub fn order_details(&self) -> OrderDetailsRepository {
        Repository::new(self.pool.clone(), Arc::clone(&self.tracker))
    }

    /// Returns the products repository.
    pub fn products(&self) -> ProductsRepository {
        Repository::new(self.pool.clone(), Arc::clone(&self.tracker))
    }

    /// Returns the services repository.
    pub fn services(&self) -> ServiceRepository {
        Repository::new(self.pool.clone(), Arc::clone(&self.tracker))
    }

    // -------------------------------------------------------------------------
    // Unit-of-Work Operations
    // -------------------------------------------------------------------------

    /// Number of staged, uncommitted changes.
    pub fn pending_changes(&self) -> usize {
        self.tracker.len()
    }

    /// Whether anything is staged.
    pub fn has_pending_changes(&self) -> bool {
        self.pending_changes() > 0
    }

    /// Drops every staged change without touching the database.
    pub fn discard_changes(&self) {
        let dropped = self.tracker.len();
        self.tracker.clear();
        if dropped > 0 {
            debug!(dropped, "Discarded staged changes");
        }
    }

    /// Applies every staged change inside one transaction.
    ///
    /// ## Semantics
    /// - Changes apply in staging order
    /// - An UPDATE or DELETE whose id matches no row affects zero rows and
    ///   is NOT an error (updating a never-persisted entity is a no-op)
    /// - Constraint violations (duplicate id, missing foreign key) fail the
    ///   whole batch: the transaction rolls back and nothing is applied
    /// - A failed batch is discarded; callers restage after fixing the input
    ///
    /// ## Returns
    /// Total rows affected across the batch. Zero when nothing was staged.
    pub async fn save_changes(&self) -> StoreResult<u64> {
        let staged = self.tracker.drain();
        if staged.is_empty() {
            return Ok(0);
        }

        debug!(changes = staged.len(), "Flushing staged changes");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::TransactionFailed(e.to_string()))?;

        let mut affected = 0u64;
        for change in &staged {
            debug!(
                entity = change.entity,
                id = change.entity_id,
                kind = ?change.kind,
                "Applying staged change"
            );

            let mut query = sqlx::query(&change.sql);
            for value in &change.args {
                query = value.bind(query);
            }

            let result = query.execute(&mut *tx).await?;
            affected += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::TransactionFailed(e.to_string()))?;

        info!(changes = staged.len(), rows = affected, "Committed unit of work");
        Ok(affected)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
