//! # Repository Module
//!
//! Repository implementations for the EcoPower Logistics store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Calling Layer                                                         │
//! │       │                                                                 │
//! │       │  ctx.products().search("panel", 20)                            │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  Repository<Product>                                                   │
//! │  ├── get_by_id / get_all / find / exists / count    (reads)            │
//! │  ├── add / add_range / remove / remove_range / update  (staged)        │
//! │  └── search / in_stock                     (Product-specific)          │
//! │       │                                                                 │
//! │       │  SQL composed from Entity metadata                              │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • One implementation instead of one class per entity                  │
//! │  • SQL is isolated in one place                                        │
//! │  • One shared test suite, instantiated per entity                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomersRepository`] - customer lookups, surname search
//! - [`OrdersRepository`] - order lookups, per-customer and recent views
//! - [`OrderDetailsRepository`] - order lines, per-order views
//! - [`ProductsRepository`] - product catalogue, name search, stock views
//! - [`ServiceRepository`] - service catalogue, name search

pub mod customers;
pub mod generic;
pub mod order_details;
pub mod orders;
pub mod products;
pub mod services;

pub use customers::CustomersRepository;
pub use generic::Repository;
pub use order_details::OrderDetailsRepository;
pub use orders::OrdersRepository;
pub use products::ProductsRepository;
pub use services::ServiceRepository;
