//! In-memory adapters used when no database is configured and in tests.
//!
//! Data lives for the lifetime of the process only.

mod health_log_repository;
mod user_repository;

pub use health_log_repository::InMemoryHealthLogRepository;
pub use user_repository::InMemoryUserRepository;

const POISONED: &str = "in-memory store lock poisoned";
