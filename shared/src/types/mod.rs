//! Type definitions shared by the API and services
//!
//! - `common` - Sort order
//! - `pagination` - Pagination for list endpoints
//! - `response` - API response wrappers and health checks

pub mod common;
pub mod pagination;
pub mod response;

pub use common::SortOrder;
pub use pagination::{PaginatedResponse, Pagination};
pub use response::{ApiResponse, HealthResponse, HealthStatus, MessageResponse, ServiceHealth};
