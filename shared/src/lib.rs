//! Shared utilities and common types for the ReWear server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Utility functions (email validation, masking)
//! - Common type definitions

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AuthConfig, DatabaseConfig, Environment, LoggingConfig, ServerConfig, StoreBackend,
    StoreConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, PaginatedResponse, Pagination, SortOrder};
pub use utils::validation;
