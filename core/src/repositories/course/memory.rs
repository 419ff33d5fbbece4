//! In-memory implementation of CourseRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::course::Course;
use crate::errors::DomainError;

use super::trait_::CourseRepository;

#[derive(Clone)]
pub struct InMemoryCourseRepository {
    courses: Arc<RwLock<Vec<Course>>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self {
            courses: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, DomainError> {
        Ok(self.courses.read().await.clone())
    }

    async fn create(&self, course: Course) -> Result<Course, DomainError> {
        self.courses.write().await.push(course.clone());
        Ok(course)
    }
}
