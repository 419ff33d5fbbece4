//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Schema bootstrap
//! - Repository pattern implementations
//! - Read-only store inspection

pub mod connection;
pub mod inspect;
pub mod mysql;
pub mod schema;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use inspect::{inspect_store, StoreReport, TableReport, DEFAULT_SAMPLE_THRESHOLD};
pub use mysql::{
    MySqlCourseRepository, MySqlItemRepository, MySqlSubscriberRepository, MySqlSwapRepository,
    MySqlUserRepository,
};
pub use schema::bootstrap_schema;
