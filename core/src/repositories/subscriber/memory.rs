//! In-memory implementation of SubscriberRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::subscriber::Subscriber;
use crate::errors::DomainError;

use super::trait_::SubscriberRepository;

#[derive(Clone)]
pub struct InMemorySubscriberRepository {
    subscribers: Arc<RwLock<Vec<Subscriber>>>,
}

impl InMemorySubscriberRepository {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemorySubscriberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriberRepository for InMemorySubscriberRepository {
    async fn insert(&self, subscriber: Subscriber) -> Result<Subscriber, DomainError> {
        // Uniqueness check and push share one write guard
        let mut subscribers = self.subscribers.write().await;

        if subscribers.iter().any(|s| s.email == subscriber.email) {
            return Err(DomainError::Conflict {
                field: "email".to_string(),
            });
        }

        subscribers.push(subscriber.clone());
        Ok(subscriber)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, DomainError> {
        let subscribers = self.subscribers.read().await;
        Ok(subscribers.iter().find(|s| s.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Subscriber>, DomainError> {
        Ok(self.subscribers.read().await.clone())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.subscribers.read().await.len() as u64)
    }
}
