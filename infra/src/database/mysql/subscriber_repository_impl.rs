//! MySQL implementation of the SubscriberRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use rw_core::domain::entities::subscriber::Subscriber;
use rw_core::errors::DomainError;
use rw_core::repositories::SubscriberRepository;

use super::{column, insert_error, query_error, uuid_column};

/// MySQL implementation of SubscriberRepository
///
/// Duplicate emails are rejected by the `uq_subscribers_email` index.
pub struct MySqlSubscriberRepository {
    pool: MySqlPool,
}

impl MySqlSubscriberRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_subscriber(row: &MySqlRow) -> Result<Subscriber, DomainError> {
        Ok(Subscriber {
            id: uuid_column(row, "id")?,
            email: column(row, "email")?,
            subscribed_at: column::<DateTime<Utc>>(row, "subscribed_at")?,
        })
    }
}

#[async_trait]
impl SubscriberRepository for MySqlSubscriberRepository {
    async fn insert(&self, subscriber: Subscriber) -> Result<Subscriber, DomainError> {
        sqlx::query("INSERT INTO subscribers (id, email, subscribed_at) VALUES (?, ?, ?)")
            .bind(subscriber.id.to_string())
            .bind(&subscriber.email)
            .bind(subscriber.subscribed_at)
            .execute(&self.pool)
            .await
            .map_err(|e| insert_error(e, "email", "Failed to insert subscriber"))?;

        Ok(subscriber)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, DomainError> {
        let row = sqlx::query(
            "SELECT id, email, subscribed_at FROM subscribers WHERE email = ? LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error("Failed to find subscriber"))?;

        row.as_ref().map(Self::row_to_subscriber).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Subscriber>, DomainError> {
        let rows = sqlx::query("SELECT id, email, subscribed_at FROM subscribers ORDER BY seq")
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("Failed to list subscribers"))?;

        rows.iter().map(Self::row_to_subscriber).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM subscribers")
            .fetch_one(&self.pool)
            .await
            .map_err(query_error("Failed to count subscribers"))?;
        Ok(count as u64)
    }
}
