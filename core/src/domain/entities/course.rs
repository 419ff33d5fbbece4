//! Admin analytics row ("course") with affiliate click and revenue counters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use rw_shared::utils::validation::{is_valid_url, not_blank};

use crate::errors::ValidationError;

/// Upper bound for a single row's clicks and revenue, so column totals over
/// millions of rows stay within `i64`
pub const MAX_COUNTER_VALUE: i64 = 1_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub affiliate_link: String,
    pub clicks: i64,
    /// Revenue in cents
    pub revenue_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl Course {
    pub fn new(
        title: &str,
        affiliate_link: &str,
        clicks: i64,
        revenue_cents: i64,
    ) -> Result<Self, ValidationError> {
        if !not_blank(title) {
            return Err(ValidationError::RequiredField {
                field: "title".to_string(),
            });
        }
        if !is_valid_url(affiliate_link) {
            return Err(ValidationError::InvalidUrl {
                field: "affiliate_link".to_string(),
            });
        }
        for (field, value) in [("clicks", clicks), ("revenue_cents", revenue_cents)] {
            if !(0..=MAX_COUNTER_VALUE).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    min: 0,
                    max: MAX_COUNTER_VALUE,
                });
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            affiliate_link: affiliate_link.to_string(),
            clicks,
            revenue_cents,
            created_at: Utc::now(),
        })
    }
}

/// Column the analytics table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CourseSortField {
    Title,
    #[default]
    Clicks,
    Revenue,
    CreatedAt,
}

impl fmt::Display for CourseSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CourseSortField::Title => "title",
            CourseSortField::Clicks => "clicks",
            CourseSortField::Revenue => "revenue",
            CourseSortField::CreatedAt => "created_at",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for CourseSortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(CourseSortField::Title),
            "clicks" => Ok(CourseSortField::Clicks),
            "revenue" | "revenue_cents" => Ok(CourseSortField::Revenue),
            "created_at" | "createdAt" => Ok(CourseSortField::CreatedAt),
            _ => Err(ValidationError::InvalidValue {
                field: "sort".to_string(),
                value: s.to_string(),
            }),
        }
    }
}
