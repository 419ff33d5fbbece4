//! Swap repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::swap::{Swap, SwapStatus};
use crate::errors::DomainError;

#[async_trait]
pub trait SwapRepository: Send + Sync {
    async fn create(&self, swap: Swap) -> Result<Swap, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Swap>, DomainError>;

    /// Swaps where the user is requester or owner, newest first
    async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<Swap>, DomainError>;

    /// Compare-and-set on the swap status
    ///
    /// # Returns
    /// * `Ok(true)` - Swap was in `from` and is now in `to`
    /// * `Ok(false)` - Swap missing or already moved on
    async fn transition_status(
        &self,
        id: Uuid,
        from: SwapStatus,
        to: SwapStatus,
    ) -> Result<bool, DomainError>;
}
