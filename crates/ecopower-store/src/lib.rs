//! # ecopower-store: Persistence Layer for EcoPower Logistics
//!
//! This crate provides database access for the EcoPower Logistics system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   EcoPower Logistics Data Flow                          │
//! │                                                                         │
//! │  Calling Layer (one unit of work per request)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  ecopower-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐   ┌─────────────────┐   ┌────────────────┐  │   │
//! │  │   │    Store    │   │  StoreContext   │   │   Migrations   │  │   │
//! │  │   │  (pool.rs)  │──►│  (context.rs)   │   │   (embedded)   │  │   │
//! │  │   │             │   │                 │   │                │  │   │
//! │  │   │ SqlitePool  │   │ ChangeTracker   │   │ 001_init.sql   │  │   │
//! │  │   │ WAL + FKs   │   │ save_changes()  │   │ 002_index.sql  │  │   │
//! │  │   └─────────────┘   └────────┬────────┘   └────────────────┘  │   │
//! │  │                              │                                 │   │
//! │  │                     ┌────────▼────────┐                        │   │
//! │  │                     │ Repository<E>   │  one generic impl,     │   │
//! │  │                     │ (repository/)   │  five entity aliases   │   │
//! │  │                     └─────────────────┘                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Store error types
//! - [`entity`] - The Entity mapping trait and per-entity implementations
//! - [`value`] - Owned bind values for staged statements
//! - [`context`] - The unit of work (change tracker + save_changes)
//! - [`repository`] - The generic repository and per-entity extensions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ecopower_store::{Store, StoreConfig};
//!
//! // Create store with default config (runs migrations)
//! let store = Store::new(StoreConfig::new("path/to/store.db")).await?;
//!
//! // One unit of work per request
//! let ctx = store.context();
//!
//! // Reads hit the store directly
//! let products = ctx.products().search("panel", 20).await?;
//!
//! // Mutations stage until the caller commits
//! ctx.customers().add(&customer)?;
//! ctx.orders().add(&order)?;
//! ctx.save_changes().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod context;
pub mod entity;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod value;

// =============================================================================
// Re-exports
// =============================================================================

pub use context::StoreContext;
pub use entity::Entity;
pub use error::{StoreError, StoreResult};
pub use pool::{Store, StoreConfig};
pub use value::SqlValue;

// Repository re-exports for convenience
pub use repository::{
    CustomersRepository, OrderDetailsRepository, OrdersRepository, ProductsRepository, Repository,
    ServiceRepository,
};
