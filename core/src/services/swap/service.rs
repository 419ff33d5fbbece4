//! Swap service implementation

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::item::{Item, ItemStatus};
use crate::domain::entities::swap::{Swap, SwapKind, SwapStatus};
use crate::domain::entities::user::Actor;
use crate::errors::{DomainError, SwapError};
use crate::repositories::{ItemRepository, SwapRepository, UserRepository};

/// Input for a new swap request
#[derive(Debug, Clone, Deserialize)]
pub struct SwapRequest {
    pub requested_item_id: Uuid,
    #[serde(default)]
    pub offered_item_id: Option<Uuid>,
    #[serde(default)]
    pub use_points: bool,
}

pub struct SwapService {
    items: Arc<dyn ItemRepository>,
    users: Arc<dyn UserRepository>,
    swaps: Arc<dyn SwapRepository>,
}

impl SwapService {
    pub fn new(
        items: Arc<dyn ItemRepository>,
        users: Arc<dyn UserRepository>,
        swaps: Arc<dyn SwapRepository>,
    ) -> Self {
        Self { items, users, swaps }
    }

    /// Opens a pending swap and reserves the involved items
    pub async fn request(&self, actor: Actor, request: SwapRequest) -> Result<Swap, DomainError> {
        let requested = self.find_item(request.requested_item_id).await?;

        let owner_id = match requested.owner_id {
            Some(owner) if owner == actor.user_id => return Err(SwapError::OwnItem.into()),
            Some(owner) => owner,
            None => return Err(unavailable(&requested)),
        };
        if !requested.is_available() {
            return Err(unavailable(&requested));
        }

        let swap = if request.use_points {
            let requester = self
                .users
                .find_by_id(actor.user_id)
                .await?
                .ok_or(DomainError::Unauthorized)?;
            if !requester.can_afford(requested.points_value) {
                return Err(SwapError::InsufficientPoints {
                    required: requested.points_value,
                    available: requester.points,
                }
                .into());
            }
            Swap::for_points(requested.id, actor.user_id, owner_id, requested.points_value)
        } else {
            let offered_id = request.offered_item_id.ok_or(SwapError::MissingOfferedItem)?;
            let offered = self.find_item(offered_id).await?;
            if !offered.is_owned_by(actor.user_id) {
                return Err(SwapError::OfferedItemNotOwned.into());
            }
            if !offered.is_available() {
                return Err(unavailable(&offered));
            }
            Swap::for_item(requested.id, offered.id, actor.user_id, owner_id)
        };

        self.reserve(&swap).await?;
        let swap = self.swaps.create(swap).await?;

        tracing::info!(
            swap_id = %swap.id,
            kind = swap.kind.as_str(),
            requester_id = %swap.requester_id,
            "Swap requested"
        );
        Ok(swap)
    }

    /// Swaps the caller takes part in, newest first
    pub async fn list_for(&self, actor: Actor) -> Result<Vec<Swap>, DomainError> {
        self.swaps.find_for_user(actor.user_id).await
    }

    pub async fn get(&self, actor: Actor, id: Uuid) -> Result<Swap, DomainError> {
        let swap = self.find_swap(id).await?;
        if !swap.involves(actor.user_id) && !actor.is_admin() {
            return Err(DomainError::not_found("Swap"));
        }
        Ok(swap)
    }

    /// Completes a swap on behalf of the requested item's owner
    ///
    /// Points swaps move the points before the items leave the catalog. If the
    /// requester can no longer pay, the swap goes back to pending.
    pub async fn accept(&self, actor: Actor, id: Uuid) -> Result<Swap, DomainError> {
        let swap = self.find_swap(id).await?;
        ensure_role(swap.owner_id == actor.user_id, "owner")?;
        self.transition(&swap, "accept", SwapStatus::Accepted).await?;

        if swap.kind == SwapKind::Points {
            if let Err(e) = self
                .users
                .transfer_points(swap.requester_id, swap.owner_id, swap.points)
                .await
            {
                self.swaps
                    .transition_status(swap.id, SwapStatus::Accepted, SwapStatus::Pending)
                    .await?;
                return Err(e);
            }
        }

        for item_id in swap.item_ids() {
            self.items.delete(item_id).await?;
        }

        tracing::info!(swap_id = %swap.id, kind = swap.kind.as_str(), "Swap accepted");
        self.find_swap(id).await
    }

    /// Declines a swap on behalf of the requested item's owner
    pub async fn reject(&self, actor: Actor, id: Uuid) -> Result<Swap, DomainError> {
        let swap = self.find_swap(id).await?;
        ensure_role(swap.owner_id == actor.user_id, "owner")?;
        self.close(swap, "reject", SwapStatus::Rejected).await
    }

    /// Withdraws a swap on behalf of the requester
    pub async fn cancel(&self, actor: Actor, id: Uuid) -> Result<Swap, DomainError> {
        let swap = self.find_swap(id).await?;
        ensure_role(swap.requester_id == actor.user_id, "requester")?;
        self.close(swap, "cancel", SwapStatus::Cancelled).await
    }

    async fn close(&self, swap: Swap, action: &str, to: SwapStatus) -> Result<Swap, DomainError> {
        self.transition(&swap, action, to).await?;
        let released = self.release(&swap.item_ids()).await?;

        tracing::info!(swap_id = %swap.id, status = %to, released, "Swap closed");
        self.find_swap(swap.id).await
    }

    /// Moves a pending swap to `to`, failing if another request got there first
    async fn transition(&self, swap: &Swap, action: &str, to: SwapStatus) -> Result<(), DomainError> {
        swap.ensure_pending(action)?;

        if !self
            .swaps
            .transition_status(swap.id, SwapStatus::Pending, to)
            .await?
        {
            let current = self.find_swap(swap.id).await?;
            current.ensure_pending(action)?;
            return Err(DomainError::internal("Swap status changed concurrently"));
        }
        Ok(())
    }

    async fn reserve(&self, swap: &Swap) -> Result<(), DomainError> {
        let mut reserved = Vec::new();

        for item_id in swap.item_ids() {
            let ok = self
                .items
                .transition_status(item_id, ItemStatus::Available, ItemStatus::Reserved)
                .await?;
            if !ok {
                self.release(&reserved).await?;
                return Err(SwapError::ItemNotAvailable {
                    item_id: item_id.to_string(),
                }
                .into());
            }
            reserved.push(item_id);
        }
        Ok(())
    }

    /// Returns reserved items to the catalog; returns how many were released
    async fn release(&self, item_ids: &[Uuid]) -> Result<usize, DomainError> {
        let mut released = 0;
        for item_id in item_ids {
            if self
                .items
                .transition_status(*item_id, ItemStatus::Reserved, ItemStatus::Available)
                .await?
            {
                released += 1;
            } else {
                tracing::warn!(item_id = %item_id, "Item was not reserved at release");
            }
        }
        Ok(released)
    }

    async fn find_item(&self, id: Uuid) -> Result<Item, DomainError> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item"))
    }

    async fn find_swap(&self, id: Uuid) -> Result<Swap, DomainError> {
        self.swaps
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Swap"))
    }
}

fn unavailable(item: &Item) -> DomainError {
    SwapError::ItemNotAvailable {
        item_id: item.id.to_string(),
    }
    .into()
}

fn ensure_role(allowed: bool, role: &str) -> Result<(), SwapError> {
    if allowed {
        Ok(())
    } else {
        Err(SwapError::NotParticipant {
            role: role.to_string(),
        })
    }
}
