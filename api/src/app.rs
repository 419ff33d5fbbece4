//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::time::Instant;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use tracing_actix_web::TracingLogger;

use rw_core::repositories::Repositories;
use rw_core::services::{
    AnalyticsService, CatalogService, SubscriptionService, SwapService, TokenService,
    TokenServiceConfig, UserService, UserServiceConfig,
};
use rw_infra::DatabasePool;
use rw_shared::config::AppConfig;
use rw_shared::types::{HealthStatus, ServiceHealth};

use crate::handlers::error::{json_error_handler, path_error_handler, query_error_handler};
use crate::middleware::{cors::create_cors, security::SecurityMiddleware};
use crate::routes::{self, subscription::subscribe, system};

/// Handle on the backing store, kept for health checks and shutdown
#[derive(Clone)]
pub enum Store {
    Memory,
    Mysql(DatabasePool),
}

impl Store {
    pub fn backend(&self) -> &'static str {
        match self {
            Store::Memory => "memory",
            Store::Mysql(_) => "mysql",
        }
    }

    pub async fn health(&self) -> ServiceHealth {
        let pool = match self {
            Store::Memory => {
                return ServiceHealth {
                    status: HealthStatus::Healthy,
                    message: Some("in-memory store".to_string()),
                    response_time_ms: None,
                }
            }
            Store::Mysql(pool) => pool,
        };

        let started = Instant::now();
        let (status, message) = match pool.health_check().await {
            Ok(true) => (HealthStatus::Healthy, None),
            Ok(false) => (
                HealthStatus::Degraded,
                Some("Unexpected health check result".to_string()),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Store health check failed");
                (HealthStatus::Unhealthy, Some("Store unreachable".to_string()))
            }
        };

        ServiceHealth {
            status,
            message,
            response_time_ms: Some(started.elapsed().as_millis() as u64),
        }
    }

    /// Releases pooled connections
    pub async fn close(&self) {
        if let Store::Mysql(pool) = self {
            pool.close().await;
        }
    }
}

/// Services shared by every request handler
pub struct AppState {
    pub subscriptions: SubscriptionService,
    pub catalog: CatalogService,
    pub swaps: SwapService,
    pub users: UserService,
    pub analytics: AnalyticsService,
    pub tokens: TokenService,
    pub store: Store,
    /// Base URL advertised to clients by `GET /api`
    pub public_base_url: String,
}

impl AppState {
    pub fn new(repos: &Repositories, config: &AppConfig, store: Store) -> Self {
        Self {
            subscriptions: SubscriptionService::new(repos.subscribers.clone()),
            catalog: CatalogService::new(repos.items.clone(), repos.users.clone()),
            swaps: SwapService::new(
                repos.items.clone(),
                repos.users.clone(),
                repos.swaps.clone(),
            ),
            users: UserService::new(repos.users.clone(), UserServiceConfig::from(&config.auth)),
            analytics: AnalyticsService::new(repos.courses.clone()),
            tokens: TokenService::new(TokenServiceConfig::from(&config.auth)),
            store,
            public_base_url: config.server.public_base_url.clone(),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Outermost last: request spans wrap CORS and security headers
        .wrap(SecurityMiddleware::for_environment(config.environment))
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(system::health_check))
        // Landing page form posts here
        .route("/subscribe", web::post().to(subscribe))
        .service(
            web::scope("/api")
                .route("", web::get().to(system::api_info))
                .route("/subscribe", web::post().to(subscribe))
                .configure(routes::items::configure)
                .configure(routes::catalog::configure)
                .configure(routes::swaps::configure)
                .configure(routes::users::configure)
                .configure(routes::courses::configure),
        )
        // Default 404 handler
        .default_service(web::route().to(system::not_found))
}
