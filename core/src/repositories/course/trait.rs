//! Analytics ("course") repository trait.

use async_trait::async_trait;

use crate::domain::entities::course::Course;
use crate::errors::DomainError;

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// All rows in store (insertion) order
    async fn find_all(&self) -> Result<Vec<Course>, DomainError>;

    async fn create(&self, course: Course) -> Result<Course, DomainError>;
}
