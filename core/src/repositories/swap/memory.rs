//! In-memory implementation of SwapRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::swap::{Swap, SwapStatus};
use crate::errors::DomainError;

use super::trait_::SwapRepository;

#[derive(Clone)]
pub struct InMemorySwapRepository {
    swaps: Arc<RwLock<Vec<Swap>>>,
}

impl InMemorySwapRepository {
    pub fn new() -> Self {
        Self {
            swaps: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemorySwapRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SwapRepository for InMemorySwapRepository {
    async fn create(&self, swap: Swap) -> Result<Swap, DomainError> {
        self.swaps.write().await.push(swap.clone());
        Ok(swap)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Swap>, DomainError> {
        let swaps = self.swaps.read().await;
        Ok(swaps.iter().find(|s| s.id == id).cloned())
    }

    async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<Swap>, DomainError> {
        let swaps = self.swaps.read().await;
        Ok(swaps
            .iter()
            .rev()
            .filter(|s| s.involves(user_id))
            .cloned()
            .collect())
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: SwapStatus,
        to: SwapStatus,
    ) -> Result<bool, DomainError> {
        let mut swaps = self.swaps.write().await;

        match swaps.iter_mut().find(|s| s.id == id && s.status == from) {
            Some(swap) => {
                swap.transition(to);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
