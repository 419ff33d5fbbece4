//! Admin analytics over the affiliate "courses" table.
//!
//! Sorting and totals are computed here so every client sees the same order.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::Serialize;

use rw_shared::types::SortOrder;

use crate::domain::entities::course::{Course, CourseSortField};
use crate::errors::DomainError;
use crate::repositories::CourseRepository;

/// Column sums over all rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CourseTotals {
    pub clicks: i64,
    pub revenue_cents: i64,
}

impl CourseTotals {
    /// Sums both columns; `None` if either total leaves the `i64` range
    pub fn of(rows: &[Course]) -> Option<Self> {
        rows.iter().try_fold(Self::default(), |acc, c| {
            Some(Self {
                clicks: acc.clicks.checked_add(c.clicks)?,
                revenue_cents: acc.revenue_cents.checked_add(c.revenue_cents)?,
            })
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseAnalytics {
    pub rows: Vec<Course>,
    pub totals: CourseTotals,
    pub sort: CourseSortField,
    pub order: SortOrder,
}

/// Stable sort of `rows`; ties keep their incoming order in both directions
pub fn sort_courses(rows: &mut [Course], field: CourseSortField, order: SortOrder) {
    let compare = |a: &Course, b: &Course| -> Ordering {
        match field {
            CourseSortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            CourseSortField::Clicks => a.clicks.cmp(&b.clicks),
            CourseSortField::Revenue => a.revenue_cents.cmp(&b.revenue_cents),
            CourseSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    };

    match order {
        SortOrder::Asc => rows.sort_by(compare),
        SortOrder::Desc => rows.sort_by(|a, b| compare(b, a)),
    }
}

pub struct AnalyticsService {
    courses: Arc<dyn CourseRepository>,
}

impl AnalyticsService {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn overview(
        &self,
        sort: CourseSortField,
        order: SortOrder,
    ) -> Result<CourseAnalytics, DomainError> {
        let mut rows = self.courses.find_all().await?;
        let totals = CourseTotals::of(&rows).ok_or_else(|| {
            tracing::error!(rows = rows.len(), "Course totals overflow");
            DomainError::internal("Course totals overflow")
        })?;
        sort_courses(&mut rows, sort, order);

        Ok(CourseAnalytics {
            rows,
            totals,
            sort,
            order,
        })
    }

    pub async fn create(
        &self,
        title: &str,
        affiliate_link: &str,
        clicks: i64,
        revenue_cents: i64,
    ) -> Result<Course, DomainError> {
        let course = Course::new(title, affiliate_link, clicks, revenue_cents)?;
        let course = self.courses.create(course).await?;
        tracing::info!(course_id = %course.id, "Analytics row created");
        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::course::MAX_COUNTER_VALUE;
    use crate::errors::ValidationError;
    use crate::repositories::InMemoryCourseRepository;

    fn course(title: &str, clicks: i64, revenue_cents: i64) -> Course {
        Course::new(title, "https://aff.example.com/x", clicks, revenue_cents).unwrap()
    }

    fn titles(rows: &[Course]) -> Vec<&str> {
        rows.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_sort_desc_then_asc_are_reverses() {
        let mut rows = vec![course("A", 5, 0), course("B", 12, 0), course("C", 1, 0), course("D", 7, 0)];

        sort_courses(&mut rows, CourseSortField::Clicks, SortOrder::Desc);
        let desc = titles(&rows).into_iter().map(String::from).collect::<Vec<_>>();
        assert_eq!(desc, vec!["B", "D", "A", "C"]);

        sort_courses(&mut rows, CourseSortField::Clicks, SortOrder::Asc);
        let mut asc = titles(&rows).into_iter().map(String::from).collect::<Vec<_>>();
        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut rows = vec![course("first", 3, 0), course("second", 3, 0), course("third", 1, 0)];

        sort_courses(&mut rows, CourseSortField::Clicks, SortOrder::Desc);
        assert_eq!(titles(&rows), vec!["first", "second", "third"]);

        sort_courses(&mut rows, CourseSortField::Clicks, SortOrder::Asc);
        assert_eq!(titles(&rows), vec!["third", "first", "second"]);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let mut rows = vec![course("beta", 0, 0), course("Alpha", 0, 0), course("gamma", 0, 0)];
        sort_courses(&mut rows, CourseSortField::Title, SortOrder::Asc);
        assert_eq!(titles(&rows), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_totals() {
        let rows = vec![course("A", 5, 1250), course("B", 10, 300)];
        assert_eq!(
            CourseTotals::of(&rows),
            Some(CourseTotals {
                clicks: 15,
                revenue_cents: 1550
            })
        );
        assert_eq!(CourseTotals::of(&[]), Some(CourseTotals::default()));
    }

    #[test]
    fn test_totals_overflow_is_detected() {
        let mut huge = course("Huge", 0, 0);
        huge.clicks = i64::MAX;
        let rows = vec![huge, course("One", 1, 0)];
        assert_eq!(CourseTotals::of(&rows), None);
    }

    #[tokio::test]
    async fn test_overview_reports_overflow_as_error() {
        let repo = Arc::new(InMemoryCourseRepository::new());
        let mut huge = course("Huge", 0, 0);
        huge.revenue_cents = i64::MAX;
        repo.create(huge).await.unwrap();
        repo.create(course("One", 0, 1)).await.unwrap();

        let service = AnalyticsService::new(repo);
        let result = service.overview(CourseSortField::Clicks, SortOrder::Desc).await;
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_create_rejects_counter_above_limit() {
        let service = AnalyticsService::new(Arc::new(InMemoryCourseRepository::new()));
        let result = service
            .create("Huge", "https://aff.example.com/h", MAX_COUNTER_VALUE + 1, 0)
            .await;
        assert!(matches!(
            result,
            Err(DomainError::ValidationErr(ValidationError::OutOfRange { .. }))
        ));
    }

    #[tokio::test]
    async fn test_overview_sorts_by_revenue() {
        let service = AnalyticsService::new(Arc::new(InMemoryCourseRepository::new()));
        service.create("Low", "https://aff.example.com/l", 1, 100).await.unwrap();
        service.create("High", "https://aff.example.com/h", 1, 900).await.unwrap();

        let overview = service
            .overview(CourseSortField::Revenue, SortOrder::Desc)
            .await
            .unwrap();
        assert_eq!(titles(&overview.rows), vec!["High", "Low"]);
        assert_eq!(overview.totals.revenue_cents, 1000);
        assert_eq!(overview.totals.clicks, 2);
    }
}
