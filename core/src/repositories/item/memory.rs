//! In-memory implementation of ItemRepository

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use rw_shared::types::Pagination;

use crate::domain::entities::item::{Item, ItemFilter, ItemStatus};
use crate::errors::DomainError;

use super::trait_::ItemRepository;

/// Item repository backed by a vector, preserving insertion order
#[derive(Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_all(&self, filter: &ItemFilter) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.iter().filter(|i| filter.matches(i)).cloned().collect())
    }

    async fn find_page(
        &self,
        filter: &ItemFilter,
        pagination: Pagination,
    ) -> Result<(Vec<Item>, u64), DomainError> {
        let matching = self.find_all(filter).await?;
        let total = matching.len() as u64;
        Ok((pagination.slice(matching), total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|i| i.id == id).cloned())
    }

    async fn create(&self, item: Item) -> Result<Item, DomainError> {
        let mut items = self.items.write().await;

        if items.iter().any(|i| i.id == item.id) {
            return Err(DomainError::Conflict {
                field: "id".to_string(),
            });
        }

        items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, item: Item) -> Result<Item, DomainError> {
        let mut items = self.items.write().await;

        match items.iter_mut().find(|i| i.id == item.id) {
            Some(stored) => {
                *stored = Item {
                    status: stored.status,
                    ..item
                };
                Ok(stored.clone())
            }
            None => Err(DomainError::not_found("Item")),
        }
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: ItemStatus,
        to: ItemStatus,
    ) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;

        match items.iter_mut().find(|i| i.id == id && i.status == from) {
            Some(item) => {
                item.status = to;
                item.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|i| i.id != id);
        Ok(items.len() != before)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.items.read().await.len() as u64)
    }
}
