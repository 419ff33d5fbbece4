use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use chrono::Utc;

use rw_shared::errors::{error_codes, ErrorResponse};
use rw_shared::types::{HealthResponse, HealthStatus};

use crate::app::AppState;

/// Health check endpoint handler
///
/// 200 while the store answers, 503 once it does not.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store = state.store.health().await;
    let status = store.status;

    let mut services = HashMap::new();
    services.insert("store".to_string(), store);

    let body = HealthResponse {
        status,
        services,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    match status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(body),
        _ => HttpResponse::Ok().json(body),
    }
}

/// API index, also tells clients which base URL to call
pub async fn api_info(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "ReWear API",
        "version": env!("CARGO_PKG_VERSION"),
        "base_url": state.public_base_url,
        "endpoints": {
            "health": "GET /health",
            "subscribe": "POST /api/subscribe",
            "items": "GET|POST /api/items, GET|PUT|DELETE /api/items/{id}, PATCH /api/items/{id}/status",
            "catalog": "GET /api/catalog",
            "swaps": "GET|POST /api/swaps, POST /api/swaps/{id}/accept|reject|cancel",
            "users": "POST /api/users, GET /api/users/me",
            "courses": "GET|POST /api/courses (admin)"
        }
    }))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
