//! Business services containing domain logic and use cases.

pub mod analytics;
pub mod catalog;
pub mod seed;
pub mod subscription;
pub mod swap;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use analytics::{sort_courses, AnalyticsService, CourseAnalytics, CourseTotals};
pub use catalog::{render_cards, CardAction, CardActionKind, CatalogCard, CatalogService};
pub use seed::{seed_catalog, SeedReport};
pub use subscription::SubscriptionService;
pub use swap::{SwapRequest, SwapService};
pub use token::{IssuedToken, TokenService, TokenServiceConfig};
pub use user::{UserService, UserServiceConfig};
