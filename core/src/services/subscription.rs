//! Newsletter subscription use case.

use std::sync::Arc;

use rw_shared::utils::validation::mask_email;

use crate::domain::entities::subscriber::Subscriber;
use crate::errors::DomainError;
use crate::repositories::SubscriberRepository;

pub struct SubscriptionService {
    subscribers: Arc<dyn SubscriberRepository>,
}

impl SubscriptionService {
    pub fn new(subscribers: Arc<dyn SubscriberRepository>) -> Self {
        Self { subscribers }
    }

    /// Registers `email` for updates
    ///
    /// Validation happens before the store is touched. Uniqueness is left to
    /// the repository's atomic insert, which reports an existing address as
    /// `DomainError::Conflict { field: "email" }`.
    pub async fn subscribe(&self, email: &str) -> Result<Subscriber, DomainError> {
        let subscriber = Subscriber::new(email)?;

        match self.subscribers.insert(subscriber).await {
            Ok(stored) => {
                tracing::info!(email = %mask_email(&stored.email), "New subscriber");
                Ok(stored)
            }
            Err(DomainError::Conflict { field }) => {
                tracing::debug!(email = %mask_email(email.trim()), "Email already subscribed");
                Err(DomainError::Conflict { field })
            }
            Err(e) => Err(e),
        }
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.subscribers.count().await
    }
}
