//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports over a local
//! SQLite file. Diesel's SQLite backend is synchronous, so adapters run
//! queries on the blocking thread pool through [`DbPool::run`].
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel rows and domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) are implementation details, never exposed to the domain.
//! - **Strongly typed errors**: database failures are mapped to the port
//!   error types the domain defines.

mod diesel_catalogue_repository;
mod diesel_seed_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_catalogue_repository::DieselCatalogueRepository;
pub use diesel_seed_repository::DieselSeedRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, MIGRATIONS, PoolConfig, PoolError, RunError};
