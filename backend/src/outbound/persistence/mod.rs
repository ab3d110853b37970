//! PostgreSQL persistence adapters using Diesel with `diesel-async` and a
//! `bb8` pool.
//!
//! Row structs and table definitions stay private to this module; only the
//! repositories, the pool and the migration runner are exported.
//!
//! ```ignore
//! use annapurna::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/annapurna")).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_health_log_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_health_log_repository::DieselHealthLogRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
