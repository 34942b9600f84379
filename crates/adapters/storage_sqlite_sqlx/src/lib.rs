//! # affiche-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter built on [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Own the connection pool and run migrations at startup
//! - Implement the `PosterRepository` port against one `posters` table
//! - Map rows to domain types (dates stored as `YYYY-MM-DD` TEXT so that
//!   `ORDER BY date` is chronological)
//!
//! ## Dependency rule
//! Depends on `affiche-app` (port traits) and `affiche-domain` (types).
//! Never leaks sqlx types across the port boundary.

pub mod error;
pub mod pool;
pub mod poster_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use poster_repo::SqlitePosterRepository;
