//! Schema bootstrap.
//!
//! Tables are created idempotently on startup. Email uniqueness for users and
//! subscribers lives in `UNIQUE` indexes so concurrent inserts cannot both
//! succeed. The `seq` columns record insertion order for listing queries.

use sqlx::MySqlPool;

use crate::InfrastructureError;

/// Table names in creation order
pub const TABLES: [&str; 5] = ["users", "items", "subscribers", "swaps", "courses"];

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id CHAR(36) NOT NULL PRIMARY KEY,
        name VARCHAR(80) NOT NULL,
        email VARCHAR(254) NOT NULL,
        role VARCHAR(16) NOT NULL,
        points BIGINT NOT NULL DEFAULT 0,
        created_at DATETIME(6) NOT NULL,
        updated_at DATETIME(6) NOT NULL,
        UNIQUE KEY uq_users_email (email)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

const CREATE_ITEMS: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id CHAR(36) NOT NULL PRIMARY KEY,
        seq BIGINT NOT NULL AUTO_INCREMENT,
        name VARCHAR(255) NOT NULL,
        category VARCHAR(100) NOT NULL,
        size VARCHAR(50) NOT NULL,
        item_condition VARCHAR(100) NOT NULL,
        description TEXT NOT NULL,
        brand VARCHAR(100) NULL,
        color VARCHAR(50) NULL,
        material VARCHAR(100) NULL,
        images TEXT NOT NULL,
        location VARCHAR(255) NOT NULL,
        owner_id CHAR(36) NULL,
        owner_name VARCHAR(80) NOT NULL,
        points_value BIGINT NOT NULL DEFAULT 0,
        status VARCHAR(16) NOT NULL,
        created_at DATETIME(6) NOT NULL,
        updated_at DATETIME(6) NOT NULL,
        UNIQUE KEY uq_items_seq (seq),
        KEY idx_items_owner (owner_id),
        KEY idx_items_category (category)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

const CREATE_SUBSCRIBERS: &str = r#"
    CREATE TABLE IF NOT EXISTS subscribers (
        id CHAR(36) NOT NULL PRIMARY KEY,
        seq BIGINT NOT NULL AUTO_INCREMENT,
        email VARCHAR(254) NOT NULL,
        subscribed_at DATETIME(6) NOT NULL,
        UNIQUE KEY uq_subscribers_seq (seq),
        UNIQUE KEY uq_subscribers_email (email)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

const CREATE_SWAPS: &str = r#"
    CREATE TABLE IF NOT EXISTS swaps (
        id CHAR(36) NOT NULL PRIMARY KEY,
        seq BIGINT NOT NULL AUTO_INCREMENT,
        requested_item_id CHAR(36) NOT NULL,
        offered_item_id CHAR(36) NULL,
        requester_id CHAR(36) NOT NULL,
        owner_id CHAR(36) NOT NULL,
        kind VARCHAR(16) NOT NULL,
        points BIGINT NOT NULL DEFAULT 0,
        status VARCHAR(16) NOT NULL,
        created_at DATETIME(6) NOT NULL,
        updated_at DATETIME(6) NOT NULL,
        UNIQUE KEY uq_swaps_seq (seq),
        KEY idx_swaps_requester (requester_id),
        KEY idx_swaps_owner (owner_id)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

const CREATE_COURSES: &str = r#"
    CREATE TABLE IF NOT EXISTS courses (
        id CHAR(36) NOT NULL PRIMARY KEY,
        seq BIGINT NOT NULL AUTO_INCREMENT,
        title VARCHAR(255) NOT NULL,
        affiliate_link VARCHAR(2048) NOT NULL,
        clicks BIGINT NOT NULL DEFAULT 0,
        revenue_cents BIGINT NOT NULL DEFAULT 0,
        created_at DATETIME(6) NOT NULL,
        UNIQUE KEY uq_courses_seq (seq)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

/// `CREATE TABLE IF NOT EXISTS` statements, aligned with [`TABLES`]
pub fn statements() -> [&'static str; 5] {
    [
        CREATE_USERS,
        CREATE_ITEMS,
        CREATE_SUBSCRIBERS,
        CREATE_SWAPS,
        CREATE_COURSES,
    ]
}

/// Create any missing tables
pub async fn bootstrap_schema(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    for (table, statement) in TABLES.iter().zip(statements()) {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            tracing::error!(table, "Schema bootstrap failed: {}", e);
            InfrastructureError::Database(e)
        })?;
        tracing::debug!(table, "Table ready");
    }

    tracing::info!("Database schema bootstrapped");
    Ok(())
}
