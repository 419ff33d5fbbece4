//! Read-only store diagnostics.
//!
//! Enumerates the tables of the connected schema with their row counts, and
//! for small tables returns every row as a JSON document built server-side
//! with `JSON_OBJECT`.

use serde::Serialize;
use serde_json::Value;
use sqlx::MySqlPool;

use crate::InfrastructureError;

/// Tables with at most this many rows get their rows sampled
pub const DEFAULT_SAMPLE_THRESHOLD: i64 = 5;

#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub name: String,
    pub count: i64,
    /// Present only for tables at or below the sample threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreReport {
    pub database: Option<String>,
    pub tables: Vec<TableReport>,
}

/// Backtick-quote an identifier
pub(crate) fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Single-quote a string literal for use as a JSON key
fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "''"))
}

pub(crate) fn count_query(table: &str) -> String {
    format!("SELECT COUNT(*) FROM {}", quote_ident(table))
}

/// `SELECT CAST(JSON_OBJECT('a', `a`, ...) AS CHAR) FROM `table``
pub(crate) fn sample_query(table: &str, columns: &[String]) -> String {
    let pairs = columns
        .iter()
        .map(|c| format!("{}, {}", quote_literal(c), quote_ident(c)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "SELECT CAST(JSON_OBJECT({}) AS CHAR) FROM {}",
        pairs,
        quote_ident(table)
    )
}

pub(crate) fn should_sample(count: i64, threshold: i64) -> bool {
    count <= threshold
}

/// Collect counts and small-table samples for every table in the current schema
pub async fn inspect_store(
    pool: &MySqlPool,
    sample_threshold: i64,
) -> Result<StoreReport, InfrastructureError> {
    let database: Option<String> = sqlx::query_scalar("SELECT DATABASE()")
        .fetch_one(pool)
        .await?;

    let tables: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT CAST(table_name AS CHAR)
        FROM information_schema.tables
        WHERE table_schema = DATABASE()
        ORDER BY table_name
        "#,
    )
    .fetch_all(pool)
    .await?;

    tracing::info!(count = tables.len(), "Found tables");

    let mut reports = Vec::with_capacity(tables.len());
    for name in tables {
        let count: i64 = sqlx::query_scalar(&count_query(&name))
            .fetch_one(pool)
            .await?;

        let samples = if should_sample(count, sample_threshold) {
            Some(sample_rows(pool, &name).await?)
        } else {
            None
        };

        tracing::debug!(table = %name, count, "Inspected table");
        reports.push(TableReport {
            name,
            count,
            samples,
        });
    }

    Ok(StoreReport {
        database,
        tables: reports,
    })
}

async fn sample_rows(pool: &MySqlPool, table: &str) -> Result<Vec<Value>, InfrastructureError> {
    let columns: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT CAST(column_name AS CHAR)
        FROM information_schema.columns
        WHERE table_schema = DATABASE() AND table_name = ?
        ORDER BY ordinal_position
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    if columns.is_empty() {
        return Ok(Vec::new());
    }

    let documents: Vec<String> = sqlx::query_scalar(&sample_query(table, &columns))
        .fetch_all(pool)
        .await?;

    documents
        .iter()
        .map(|doc| serde_json::from_str(doc).map_err(InfrastructureError::from))
        .collect()
}
