//! One-shot store inspection.
//!
//! Prints every table with its row count, plus the rows of small tables as
//! JSON documents. The pool is closed before exit whether or not the
//! inspection succeeded.
//!
//! Usage:
//!   cargo run -p rw_infra --bin rw_inspect
//!
//! Environment variables:
//!   DATABASE_URL - MySQL connection string
//!   INSPECT_SAMPLE_THRESHOLD - sample tables with at most this many rows (default: 5)

use anyhow::Context;

use rw_infra::database::{inspect_store, DatabasePool, DEFAULT_SAMPLE_THRESHOLD};
use rw_shared::config::DatabaseConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let threshold = match std::env::var("INSPECT_SAMPLE_THRESHOLD") {
        Ok(raw) => raw
            .parse::<i64>()
            .with_context(|| format!("INSPECT_SAMPLE_THRESHOLD must be an integer, got {raw:?}"))?,
        Err(_) => DEFAULT_SAMPLE_THRESHOLD,
    };

    let config = DatabaseConfig::from_env().with_max_connections(2);
    tracing::info!(url = %config.redacted_url(), "Connecting to store");
    let pool = DatabasePool::new(config)
        .await
        .context("Failed to connect to the store")?;

    let result = inspect_store(pool.get_pool(), threshold).await;
    pool.close().await;

    let report = result.map_err(|e| {
        tracing::error!("Inspection failed: {}", e);
        e
    })?;

    println!(
        "Database: {}",
        report.database.as_deref().unwrap_or("(none selected)")
    );
    for table in &report.tables {
        println!("\n{} ({} rows)", table.name, table.count);
        if let Some(samples) = &table.samples {
            for doc in samples {
                println!("  {}", serde_json::to_string_pretty(doc)?.replace('\n', "\n  "));
            }
        }
    }

    Ok(())
}
