//! Domain layer containing business entities and fixture data.

pub mod entities;
pub mod fixtures;

// Re-export commonly used domain types
pub use entities::*;
