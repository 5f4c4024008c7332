//! # userbase-adapter-storage-postgres-sqlx
//!
//! `PostgreSQL` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `userbase-app::ports::storage`
//! - Manage the `PostgreSQL` connection pool lifecycle
//! - Ensure the `users` table exists before the pool is handed out
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `userbase-app` (for port traits) and `userbase-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod schema;
pub mod user_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use user_repo::PostgresUserRepository;
