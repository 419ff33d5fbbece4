//! Token service module for bearer token management
//!
//! Issues and verifies HS256 JWTs carrying the user id and role.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::{IssuedToken, TokenService};
