//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the ReWear backend,
//! following Clean Architecture principles. It provides the MySQL-backed
//! implementations of the repository traits defined in `rw_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: connection pool, schema bootstrap and MySQL repositories using SQLx
//! - **Inspection**: read-only store diagnostics used by the `rw_inspect` binary

pub mod database;

use std::sync::Arc;

use rw_core::repositories::Repositories;

pub use database::{DatabasePool, PoolStatistics};

/// Repositories backed by the given MySQL pool
pub fn mysql_repositories(pool: &DatabasePool) -> Repositories {
    let pool = pool.get_pool().clone();
    Repositories {
        items: Arc::new(database::MySqlItemRepository::new(pool.clone())),
        subscribers: Arc::new(database::MySqlSubscriberRepository::new(pool.clone())),
        users: Arc::new(database::MySqlUserRepository::new(pool.clone())),
        swaps: Arc::new(database::MySqlSwapRepository::new(pool.clone())),
        courses: Arc::new(database::MySqlCourseRepository::new(pool)),
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored JSON could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
