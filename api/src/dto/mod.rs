//! Request and response bodies of the HTTP API.

pub mod course;
pub mod item;
pub mod subscription;
pub mod user;

pub use course::{CourseQuery, CreateCourseRequest};
pub use item::{ItemQuery, ItemRequest, UpdateStatusRequest};
pub use subscription::SubscribeRequest;
pub use user::{RegisterUserRequest, RegisteredUser};
