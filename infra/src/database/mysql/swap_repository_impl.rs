//! MySQL implementation of the SwapRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use rw_core::domain::entities::swap::{Swap, SwapKind, SwapStatus};
use rw_core::errors::DomainError;
use rw_core::repositories::SwapRepository;

use super::{column, insert_error, optional_uuid_column, parsed_column, query_error, uuid_column};

const SWAP_COLUMNS: &str = "id, requested_item_id, offered_item_id, requester_id, owner_id, kind, \
     points, status, created_at, updated_at";

pub struct MySqlSwapRepository {
    pool: MySqlPool,
}

impl MySqlSwapRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_swap(row: &MySqlRow) -> Result<Swap, DomainError> {
        Ok(Swap {
            id: uuid_column(row, "id")?,
            requested_item_id: uuid_column(row, "requested_item_id")?,
            offered_item_id: optional_uuid_column(row, "offered_item_id")?,
            requester_id: uuid_column(row, "requester_id")?,
            owner_id: uuid_column(row, "owner_id")?,
            kind: parsed_column::<SwapKind>(row, "kind")?,
            points: column(row, "points")?,
            status: parsed_column::<SwapStatus>(row, "status")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl SwapRepository for MySqlSwapRepository {
    async fn create(&self, swap: Swap) -> Result<Swap, DomainError> {
        let query = r#"
            INSERT INTO swaps (
                id, requested_item_id, offered_item_id, requester_id, owner_id,
                kind, points, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(swap.id.to_string())
            .bind(swap.requested_item_id.to_string())
            .bind(swap.offered_item_id.map(|id| id.to_string()))
            .bind(swap.requester_id.to_string())
            .bind(swap.owner_id.to_string())
            .bind(swap.kind.as_str())
            .bind(swap.points)
            .bind(swap.status.as_str())
            .bind(swap.created_at)
            .bind(swap.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| insert_error(e, "id", "Failed to create swap"))?;

        Ok(swap)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Swap>, DomainError> {
        let query = format!("SELECT {} FROM swaps WHERE id = ? LIMIT 1", SWAP_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("Failed to find swap"))?;

        row.as_ref().map(Self::row_to_swap).transpose()
    }

    async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<Swap>, DomainError> {
        let query = format!(
            "SELECT {} FROM swaps WHERE requester_id = ? OR owner_id = ? ORDER BY seq DESC",
            SWAP_COLUMNS
        );
        let user_id = user_id.to_string();
        let rows = sqlx::query(&query)
            .bind(&user_id)
            .bind(&user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("Failed to list swaps"))?;

        rows.iter().map(Self::row_to_swap).collect()
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: SwapStatus,
        to: SwapStatus,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE swaps SET status = ?, updated_at = ? WHERE id = ? AND status = ?",
        )
        .bind(to.as_str())
        .bind(Utc::now())
        .bind(id.to_string())
        .bind(from.as_str())
        .execute(&self.pool)
        .await
        .map_err(query_error("Failed to update swap status"))?;

        Ok(result.rows_affected() == 1)
    }
}
