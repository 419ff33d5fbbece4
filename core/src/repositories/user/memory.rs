//! In-memory implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, SwapError};

use super::trait_::UserRepository;

#[derive(Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Conflict {
                field: "email".to_string(),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn transfer_points(&self, from: Uuid, to: Uuid, amount: i64) -> Result<(), DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&to) {
            return Err(DomainError::not_found("User"));
        }
        let payer = users.get_mut(&from).ok_or_else(|| DomainError::not_found("User"))?;
        if !payer.can_afford(amount) {
            return Err(SwapError::InsufficientPoints {
                required: amount,
                available: payer.points,
            }
            .into());
        }

        let now = Utc::now();
        payer.points -= amount;
        payer.updated_at = now;
        if let Some(payee) = users.get_mut(&to) {
            payee.points += amount;
            payee.updated_at = now;
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.users.read().await.len() as u64)
    }
}
