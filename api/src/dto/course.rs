use serde::{Deserialize, Serialize};
use validator::Validate;

use rw_core::domain::entities::course::CourseSortField;
use rw_core::errors::ValidationError;
use rw_shared::types::SortOrder;

/// Body of `POST /api/courses`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(url)]
    pub affiliate_link: String,

    #[serde(default)]
    #[validate(range(min = 0, max = 1_000_000_000_000))]
    pub clicks: i64,

    #[serde(default)]
    #[validate(range(min = 0, max = 1_000_000_000_000))]
    pub revenue_cents: i64,
}

/// Query string of `GET /api/courses`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseQuery {
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl CourseQuery {
    /// Sort column and direction, defaulting to clicks descending
    pub fn sorting(&self) -> Result<(CourseSortField, SortOrder), ValidationError> {
        let field = match self.sort.as_deref() {
            Some(sort) => sort.parse::<CourseSortField>()?,
            None => CourseSortField::default(),
        };
        let order = match self.order.as_deref() {
            Some(order) => order.parse::<SortOrder>().map_err(|_| ValidationError::InvalidValue {
                field: "order".to_string(),
                value: order.to_string(),
            })?,
            None => SortOrder::Desc,
        };
        Ok((field, order))
    }
}
