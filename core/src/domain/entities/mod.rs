//! Domain entities representing core business objects.

pub mod course;
pub mod item;
pub mod subscriber;
pub mod swap;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use course::{Course, CourseSortField};
pub use item::{
    BadgeColor, Condition, Item, ItemDetails, ItemFilter, ItemStatus, MAX_IMAGES, MAX_POINTS_VALUE,
};
pub use subscriber::Subscriber;
pub use swap::{Swap, SwapKind, SwapStatus};
pub use token::{Claims, DEFAULT_TOKEN_EXPIRY_SECONDS, JWT_AUDIENCE, JWT_ISSUER};
pub use user::{Actor, User, UserRole, MAX_NAME_LENGTH};
