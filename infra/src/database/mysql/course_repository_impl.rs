//! MySQL implementation of the CourseRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use rw_core::domain::entities::course::Course;
use rw_core::errors::DomainError;
use rw_core::repositories::CourseRepository;

use super::{column, insert_error, query_error, uuid_column};

pub struct MySqlCourseRepository {
    pool: MySqlPool,
}

impl MySqlCourseRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_course(row: &MySqlRow) -> Result<Course, DomainError> {
        Ok(Course {
            id: uuid_column(row, "id")?,
            title: column(row, "title")?,
            affiliate_link: column(row, "affiliate_link")?,
            clicks: column(row, "clicks")?,
            revenue_cents: column(row, "revenue_cents")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
        })
    }
}

#[async_trait]
impl CourseRepository for MySqlCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, affiliate_link, clicks, revenue_cents, created_at
            FROM courses
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_error("Failed to list courses"))?;

        rows.iter().map(Self::row_to_course).collect()
    }

    async fn create(&self, course: Course) -> Result<Course, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO courses (id, title, affiliate_link, clicks, revenue_cents, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(course.id.to_string())
        .bind(&course.title)
        .bind(&course.affiliate_link)
        .bind(course.clicks)
        .bind(course.revenue_cents)
        .bind(course.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error(e, "id", "Failed to create course"))?;

        Ok(course)
    }
}
