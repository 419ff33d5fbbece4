//! HTTP route handlers, one module per resource

pub mod catalog;
pub mod courses;
pub mod items;
pub mod subscription;
pub mod swaps;
pub mod system;
pub mod users;
