//! Apartment persistence adapters.
//!
//! Concrete implementations of the apartment repository port: a PostgreSQL
//! adapter built on Diesel with async support through `diesel-async` and
//! `bb8` connection pooling, and an in-memory adapter for tests and local
//! tooling.
//!
//! Diesel row structs (`models.rs`) and schema definitions (`schema.rs`)
//! are internal details and never reach the domain layer. Database errors
//! are mapped to [`crate::domain::ports::ApartmentRepositoryError`].
//!
//! # Example
//!
//! ```ignore
//! use rental::outbound::persistence::{DbPool, DieselApartmentRepository, PoolConfig};
//!
//! let config = PoolConfig::new("postgres://localhost/rental");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselApartmentRepository::new(pool);
//! ```

mod diesel_apartment_repository;
mod diesel_basic_error_mapping;
mod in_memory_apartment_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_apartment_repository::DieselApartmentRepository;
pub use in_memory_apartment_repository::InMemoryApartmentRepository;
pub use migrations::{MigrationError, apply_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
