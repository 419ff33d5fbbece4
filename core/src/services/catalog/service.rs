//! Catalog service implementation

use std::sync::Arc;

use uuid::Uuid;

use rw_shared::types::{PaginatedResponse, Pagination};

use crate::domain::entities::item::{Item, ItemDetails, ItemFilter, ItemStatus};
use crate::domain::entities::user::Actor;
use crate::errors::DomainError;
use crate::repositories::{ItemRepository, UserRepository};

use super::cards::{render_cards, CatalogCard};

/// Listing CRUD with ownership checks
pub struct CatalogService {
    items: Arc<dyn ItemRepository>,
    users: Arc<dyn UserRepository>,
}

impl CatalogService {
    pub fn new(items: Arc<dyn ItemRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { items, users }
    }

    /// Every item matching `filter`
    pub async fn list(&self, filter: &ItemFilter) -> Result<Vec<Item>, DomainError> {
        self.items.find_all(filter).await
    }

    /// One page of items matching `filter`
    pub async fn list_page(
        &self,
        filter: &ItemFilter,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Item>, DomainError> {
        let (data, total) = self.items.find_page(filter, pagination).await?;
        Ok(PaginatedResponse::new(data, pagination, total))
    }

    /// Catalog cards for every item matching `filter`
    pub async fn cards(&self, filter: &ItemFilter) -> Result<Vec<CatalogCard>, DomainError> {
        let items = self.items.find_all(filter).await?;
        Ok(render_cards(&items))
    }

    pub async fn get(&self, id: Uuid) -> Result<Item, DomainError> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item"))
    }

    /// Lists a new item owned by the caller
    pub async fn create(&self, actor: Actor, details: ItemDetails) -> Result<Item, DomainError> {
        details.validate()?;

        let owner = self
            .users
            .find_by_id(actor.user_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let item = self
            .items
            .create(Item::new(details, Some(owner.id), owner.name))
            .await?;

        tracing::info!(item_id = %item.id, owner_id = %actor.user_id, "Item listed");
        Ok(item)
    }

    /// Replaces the editable fields of a listing; status is left as stored
    pub async fn update(
        &self,
        actor: Actor,
        id: Uuid,
        details: ItemDetails,
    ) -> Result<Item, DomainError> {
        details.validate()?;

        let mut item = self.managed_item(actor, id).await?;
        item.apply(details);
        self.items.update(item).await
    }

    /// Sets the status of a listing
    ///
    /// Items tied to a pending swap stay reserved until the swap resolves. The
    /// change only lands if the item is still in the status read here.
    pub async fn set_status(
        &self,
        actor: Actor,
        id: Uuid,
        status: ItemStatus,
    ) -> Result<Item, DomainError> {
        let item = self.managed_item(actor, id).await?;

        if item.status == ItemStatus::Reserved || status == ItemStatus::Reserved {
            return Err(reserved_by_swap());
        }
        if item.status == status {
            return Ok(item);
        }

        if !self.items.transition_status(id, item.status, status).await? {
            let current = self.get(id).await?;
            if current.status == ItemStatus::Reserved {
                return Err(reserved_by_swap());
            }
            return Err(DomainError::BusinessRule {
                message: format!("Item status changed to {} concurrently", current.status),
            });
        }

        tracing::info!(item_id = %id, from = %item.status, to = %status, "Item status changed");
        self.get(id).await
    }

    pub async fn delete(&self, actor: Actor, id: Uuid) -> Result<(), DomainError> {
        let item = self.managed_item(actor, id).await?;

        if item.status == ItemStatus::Reserved {
            return Err(DomainError::BusinessRule {
                message: "Item is part of a pending swap".to_string(),
            });
        }

        if !self.items.delete(id).await? {
            return Err(DomainError::not_found("Item"));
        }

        tracing::info!(item_id = %id, actor_id = %actor.user_id, "Item deleted");
        Ok(())
    }

    async fn managed_item(&self, actor: Actor, id: Uuid) -> Result<Item, DomainError> {
        let item = self.get(id).await?;
        if !actor.can_manage(item.owner_id) {
            return Err(DomainError::forbidden("Only the owner can modify this item"));
        }
        Ok(item)
    }
}

fn reserved_by_swap() -> DomainError {
    DomainError::BusinessRule {
        message: "Reserved status is managed by the swap workflow".to_string(),
    }
}
