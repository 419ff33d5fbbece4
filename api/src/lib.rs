//! # ReWear API
//!
//! HTTP layer of the ReWear backend: actix-web routes, middleware, request
//! DTOs and the mapping from domain errors to JSON error responses.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState, Store};
