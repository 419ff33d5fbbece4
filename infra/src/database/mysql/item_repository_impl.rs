//! MySQL implementation of the ItemRepository trait.
//!
//! Image lists are stored as a JSON array in a TEXT column. Filter matching
//! relies on the table's case-insensitive collation for equality checks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use rw_core::domain::entities::item::{Condition, Item, ItemFilter, ItemStatus};
use rw_core::errors::DomainError;
use rw_core::repositories::ItemRepository;
use rw_shared::types::Pagination;

use super::{column, insert_error, optional_uuid_column, parsed_column, query_error, uuid_column};

const ITEM_COLUMNS: &str = "id, name, category, size, item_condition, description, brand, color, \
     material, images, location, owner_id, owner_name, points_value, status, created_at, updated_at";

/// MySQL implementation of ItemRepository
pub struct MySqlItemRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlItemRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Item entity
    fn row_to_item(row: &MySqlRow) -> Result<Item, DomainError> {
        let images: String = column(row, "images")?;
        let images: Vec<String> = serde_json::from_str(&images).map_err(|e| DomainError::Internal {
            message: format!("Invalid images JSON: {}", e),
        })?;
        let condition: String = column(row, "item_condition")?;

        Ok(Item {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            category: column(row, "category")?,
            size: column(row, "size")?,
            condition: Condition::from(condition),
            description: column(row, "description")?,
            brand: column(row, "brand")?,
            color: column(row, "color")?,
            material: column(row, "material")?,
            images,
            location: column(row, "location")?,
            owner_id: optional_uuid_column(row, "owner_id")?,
            owner_name: column(row, "owner_name")?,
            points_value: column(row, "points_value")?,
            status: parsed_column::<ItemStatus>(row, "status")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    fn images_json(item: &Item) -> Result<String, DomainError> {
        serde_json::to_string(&item.images).map_err(|e| DomainError::Internal {
            message: format!("Failed to encode images: {}", e),
        })
    }

    /// Append `WHERE ...` for the given filter
    fn push_filter(builder: &mut QueryBuilder<'_, MySql>, filter: &ItemFilter) {
        builder.push(" WHERE 1 = 1");

        if let Some(category) = &filter.category {
            builder.push(" AND category = ").push_bind(category.clone());
        }
        if let Some(size) = &filter.size {
            builder.push(" AND size = ").push_bind(size.clone());
        }
        if let Some(condition) = &filter.condition {
            builder.push(" AND item_condition = ").push_bind(condition.clone());
        }
        if let Some(status) = filter.status {
            builder.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(owner_id) = filter.owner_id {
            builder.push(" AND owner_id = ").push_bind(owner_id.to_string());
        }
        if let Some(query) = filter.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let pattern = like_pattern(query);
            builder
                .push(" AND (LOWER(name) LIKE ")
                .push_bind(pattern.clone())
                .push(" OR LOWER(description) LIKE ")
                .push_bind(pattern.clone())
                .push(" OR LOWER(COALESCE(brand, '')) LIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }
}

/// `%term%` with LIKE wildcards in the term escaped
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl ItemRepository for MySqlItemRepository {
    async fn find_all(&self, filter: &ItemFilter) -> Result<Vec<Item>, DomainError> {
        let mut builder = QueryBuilder::<MySql>::new(format!("SELECT {} FROM items", ITEM_COLUMNS));
        Self::push_filter(&mut builder, filter);
        builder.push(" ORDER BY seq");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("Failed to list items"))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn find_page(
        &self,
        filter: &ItemFilter,
        pagination: Pagination,
    ) -> Result<(Vec<Item>, u64), DomainError> {
        let mut count = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM items");
        Self::push_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(query_error("Failed to count items"))?;

        let mut builder = QueryBuilder::<MySql>::new(format!("SELECT {} FROM items", ITEM_COLUMNS));
        Self::push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY seq LIMIT ")
            .push_bind(pagination.limit())
            .push(" OFFSET ")
            .push_bind(pagination.offset());

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("Failed to list items"))?;

        let items = rows.iter().map(Self::row_to_item).collect::<Result<Vec<_>, _>>()?;
        Ok((items, total as u64))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        let query = format!("SELECT {} FROM items WHERE id = ? LIMIT 1", ITEM_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("Failed to find item"))?;

        row.as_ref().map(Self::row_to_item).transpose()
    }

    async fn create(&self, item: Item) -> Result<Item, DomainError> {
        let query = r#"
            INSERT INTO items (
                id, name, category, size, item_condition, description, brand, color,
                material, images, location, owner_id, owner_name, points_value, status,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(item.id.to_string())
            .bind(&item.name)
            .bind(&item.category)
            .bind(&item.size)
            .bind(item.condition.label())
            .bind(&item.description)
            .bind(&item.brand)
            .bind(&item.color)
            .bind(&item.material)
            .bind(Self::images_json(&item)?)
            .bind(&item.location)
            .bind(item.owner_id.map(|id| id.to_string()))
            .bind(&item.owner_name)
            .bind(item.points_value)
            .bind(item.status.as_str())
            .bind(item.created_at)
            .bind(item.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| insert_error(e, "id", "Failed to create item"))?;

        Ok(item)
    }

    async fn update(&self, item: Item) -> Result<Item, DomainError> {
        let query = r#"
            UPDATE items SET
                name = ?, category = ?, size = ?, item_condition = ?, description = ?,
                brand = ?, color = ?, material = ?, images = ?, location = ?,
                points_value = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&item.name)
            .bind(&item.category)
            .bind(&item.size)
            .bind(item.condition.label())
            .bind(&item.description)
            .bind(&item.brand)
            .bind(&item.color)
            .bind(&item.material)
            .bind(Self::images_json(&item)?)
            .bind(&item.location)
            .bind(item.points_value)
            .bind(item.updated_at)
            .bind(item.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_error("Failed to update item"))?;

        // Re-read so the caller sees the stored status; MySQL reports
        // matched-but-unchanged rows as 0 affected, so that count can't tell
        // a missing row apart
        self.find_by_id(item.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item"))
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: ItemStatus,
        to: ItemStatus,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE items SET status = ?, updated_at = ? WHERE id = ? AND status = ?",
        )
        .bind(to.as_str())
        .bind(Utc::now())
        .bind(id.to_string())
        .bind(from.as_str())
        .execute(&self.pool)
        .await
        .map_err(query_error("Failed to update item status"))?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_error("Failed to delete item"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(query_error("Failed to count items"))?;
        Ok(count as u64)
    }
}
