//! Item repository trait defining the interface for catalog persistence.

use async_trait::async_trait;
use uuid::Uuid;

use rw_shared::types::Pagination;

use crate::domain::entities::item::{Item, ItemFilter, ItemStatus};
use crate::errors::DomainError;

/// Repository trait for catalog items
///
/// Listings are returned in store order (oldest first). Implementations must
/// make [`ItemRepository::transition_status`] atomic so that two swaps can
/// never reserve the same item.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items matching `filter`, in store order
    async fn find_all(&self, filter: &ItemFilter) -> Result<Vec<Item>, DomainError>;

    /// One page of items matching `filter` plus the total match count
    async fn find_page(
        &self,
        filter: &ItemFilter,
        pagination: Pagination,
    ) -> Result<(Vec<Item>, u64), DomainError>;

    /// Find an item by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - No item with the given ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, DomainError>;

    /// Persist a new item
    async fn create(&self, item: Item) -> Result<Item, DomainError>;

    /// Overwrite the editable fields of a stored item
    ///
    /// `status` is never written here; it only moves through
    /// [`ItemRepository::transition_status`].
    ///
    /// # Returns
    /// * `Ok(Item)` - The stored item after the write, with its stored status
    /// * `Err(DomainError::NotFound)` - No item with `item.id`
    async fn update(&self, item: Item) -> Result<Item, DomainError>;

    /// Move an item from `from` to `to` only if it is currently in `from`
    ///
    /// # Returns
    /// * `Ok(true)` - Status changed
    /// * `Ok(false)` - Item missing or in another status
    async fn transition_status(
        &self,
        id: Uuid,
        from: ItemStatus,
        to: ItemStatus,
    ) -> Result<bool, DomainError>;

    /// Delete an item
    ///
    /// # Returns
    /// * `Ok(true)` - Item was deleted
    /// * `Ok(false)` - Item not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Total number of stored items
    async fn count(&self) -> Result<u64, DomainError>;
}
