//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use rw_core::domain::entities::user::{User, UserRole};
use rw_core::errors::{DomainError, SwapError};
use rw_core::repositories::UserRepository;

use super::{column, insert_error, parsed_column, query_error, uuid_column};

const USER_COLUMNS: &str = "id, name, email, role, points, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
            role: parsed_column::<UserRole>(row, "role")?,
            points: column(row, "points")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("Failed to find user by id"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", USER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("Failed to find user by email"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, name, email, role, points, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.role.as_str())
            .bind(user.points)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| insert_error(e, "email", "Failed to create user"))?;

        Ok(user)
    }

    async fn transfer_points(&self, from: Uuid, to: Uuid, amount: i64) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(query_error("Failed to begin transaction"))?;

        // Lock both rows so concurrent transfers serialize on the payer
        let payer: Option<i64> =
            sqlx::query_scalar("SELECT points FROM users WHERE id = ? FOR UPDATE")
                .bind(from.to_string())
                .fetch_optional(&mut *tx)
                .await
                .map_err(query_error("Failed to lock payer"))?;
        let payee: Option<i64> =
            sqlx::query_scalar("SELECT points FROM users WHERE id = ? FOR UPDATE")
                .bind(to.to_string())
                .fetch_optional(&mut *tx)
                .await
                .map_err(query_error("Failed to lock payee"))?;

        let (Some(available), Some(_)) = (payer, payee) else {
            return Err(DomainError::not_found("User"));
        };
        if available < amount {
            return Err(SwapError::InsufficientPoints {
                required: amount,
                available,
            }
            .into());
        }

        let now = Utc::now();
        sqlx::query("UPDATE users SET points = points - ?, updated_at = ? WHERE id = ?")
            .bind(amount)
            .bind(now)
            .bind(from.to_string())
            .execute(&mut *tx)
            .await
            .map_err(query_error("Failed to debit points"))?;
        sqlx::query("UPDATE users SET points = points + ?, updated_at = ? WHERE id = ?")
            .bind(amount)
            .bind(now)
            .bind(to.to_string())
            .execute(&mut *tx)
            .await
            .map_err(query_error("Failed to credit points"))?;

        tx.commit()
            .await
            .map_err(query_error("Failed to commit points transfer"))?;

        tracing::debug!(%from, %to, amount, "Points transferred");
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(query_error("Failed to count users"))?;
        Ok(count as u64)
    }
}
