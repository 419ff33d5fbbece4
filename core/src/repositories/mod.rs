//! Repository interfaces and their in-memory implementations.

pub mod course;
pub mod item;
pub mod subscriber;
pub mod swap;
pub mod user;

use std::sync::Arc;

pub use course::{CourseRepository, InMemoryCourseRepository};
pub use item::{InMemoryItemRepository, ItemRepository};
pub use subscriber::{InMemorySubscriberRepository, SubscriberRepository};
pub use swap::{InMemorySwapRepository, SwapRepository};
pub use user::{InMemoryUserRepository, UserRepository};

/// The set of repositories a running service works against
#[derive(Clone)]
pub struct Repositories {
    pub items: Arc<dyn ItemRepository>,
    pub subscribers: Arc<dyn SubscriberRepository>,
    pub users: Arc<dyn UserRepository>,
    pub swaps: Arc<dyn SwapRepository>,
    pub courses: Arc<dyn CourseRepository>,
}

impl Repositories {
    /// Process-local repositories, used by tests and the `memory` store backend
    pub fn in_memory() -> Self {
        Self {
            items: Arc::new(InMemoryItemRepository::new()),
            subscribers: Arc::new(InMemorySubscriberRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            swaps: Arc::new(InMemorySwapRepository::new()),
            courses: Arc::new(InMemoryCourseRepository::new()),
        }
    }
}
