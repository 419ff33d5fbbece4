//! User repository trait defining the interface for member persistence.
//!
//! The trait is async-first and uses Result types for error handling. Points
//! balances are only changed through [`UserRepository::transfer_points`], so
//! implementations can keep the debit and credit in one atomic step.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Store error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Conflict { field: "email" })` - Email already registered
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Move `amount` points from one user to another
    ///
    /// Either both balances change or neither does.
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - Either user is missing
    /// * `Err(DomainError::Swap(SwapError::InsufficientPoints))` - Payer balance too low
    async fn transfer_points(&self, from: Uuid, to: Uuid, amount: i64) -> Result<(), DomainError>;

    /// Count all users
    async fn count(&self) -> Result<u64, DomainError>;
}
