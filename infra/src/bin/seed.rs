//! Seeds the fixture catalog into an empty MySQL store.
//!
//! Usage:
//!   cargo run -p rw_infra --bin rw_seed
//!
//! Environment variables:
//!   DATABASE_URL - MySQL connection string
//!   STARTING_POINTS - points credited to fixture sellers (default: 100)

use anyhow::Context;

use rw_core::services::seed_catalog;
use rw_infra::database::{bootstrap_schema, DatabasePool};
use rw_infra::mysql_repositories;
use rw_shared::config::{AuthConfig, DatabaseConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let auth = AuthConfig::from_env();
    let pool = DatabasePool::new(DatabaseConfig::from_env())
        .await
        .context("Failed to connect to the store")?;

    let result = async {
        bootstrap_schema(pool.get_pool()).await?;
        let repos = mysql_repositories(&pool);
        Ok::<_, anyhow::Error>(seed_catalog(&repos, auth.starting_points).await?)
    }
    .await;
    pool.close().await;

    let report = result?;
    if report.skipped {
        println!("Catalog already has items; nothing seeded");
    } else {
        println!(
            "Seeded {} items and {} sellers",
            report.items_created, report.users_created
        );
    }
    Ok(())
}
