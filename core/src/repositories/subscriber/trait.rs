//! Subscriber repository trait.
//!
//! Subscribers are append-only, so the interface has no update or delete.

use async_trait::async_trait;

use crate::domain::entities::subscriber::Subscriber;
use crate::errors::DomainError;

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Insert a subscriber, relying on the store's uniqueness guarantee
    ///
    /// The check and the write happen as one atomic step; callers must not
    /// look the email up beforehand.
    ///
    /// # Returns
    /// * `Ok(Subscriber)` - Stored subscriber
    /// * `Err(DomainError::Conflict { field: "email" })` - Email already subscribed
    async fn insert(&self, subscriber: Subscriber) -> Result<Subscriber, DomainError>;

    /// Find a subscriber by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, DomainError>;

    /// All subscribers in subscription order
    async fn find_all(&self) -> Result<Vec<Subscriber>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
