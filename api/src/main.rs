//! ReWear API server.
//!
//! Environment variables are read from `.env` when present; see
//! `rw_api::config` for the full set of sources.

use actix_web::{web, HttpServer};
use anyhow::Context;

use rw_api::{app::Store, config::Config, create_app, telemetry::init_tracing, AppState};
use rw_core::repositories::Repositories;
use rw_core::services::seed_catalog;
use rw_infra::database::{bootstrap_schema, DatabasePool};
use rw_infra::mysql_repositories;
use rw_shared::config::{AppConfig, StoreBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        "Starting ReWear API server"
    );
    if config.auth.is_using_default_secret() {
        tracing::warn!("JWT_SECRET is not set; using the development secret");
    }

    let (repos, store) = open_store(&config).await?;
    tracing::info!(backend = store.backend(), "Store ready");

    if config.store.seed_on_start {
        match seed_catalog(&repos, config.auth.starting_points).await {
            Ok(report) => tracing::info!(
                items = report.items_created,
                users = report.users_created,
                skipped = report.skipped,
                "Seed finished"
            ),
            Err(e) => {
                store.close().await;
                return Err(e).context("Failed to seed catalog");
            }
        }
    }

    let state = web::Data::new(AppState::new(&repos, &config, store.clone()));
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    tracing::info!(address = %bind_address, "Server will bind");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config));
    if workers > 0 {
        server = server.workers(workers);
    }

    let result = match server.bind(&bind_address) {
        Ok(server) => server.run().await.context("Server error"),
        Err(e) => Err(e).with_context(|| format!("Failed to bind {}", bind_address)),
    };

    store.close().await;
    tracing::info!("Server stopped");
    result
}

/// Connects the configured backend and returns its repositories
async fn open_store(config: &AppConfig) -> anyhow::Result<(Repositories, Store)> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on restart");
            Ok((Repositories::in_memory(), Store::Memory))
        }
        StoreBackend::Mysql => {
            let pool = DatabasePool::new(config.database.clone())
                .await
                .context("Failed to connect to the store")?;

            if config.store.bootstrap_schema {
                if let Err(e) = bootstrap_schema(pool.get_pool()).await {
                    pool.close().await;
                    return Err(e).context("Failed to bootstrap the schema");
                }
            }

            Ok((mysql_repositories(&pool), Store::Mysql(pool)))
        }
    }
}
