use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use rw_core::domain::entities::item::{Condition, ItemDetails, ItemFilter, ItemStatus};
use rw_core::errors::ValidationError;
use rw_shared::types::Pagination;

/// Body of `POST /api/items` and `PUT /api/items/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(min = 1, max = 60))]
    pub category: String,

    #[validate(length(min = 1, max = 20))]
    pub size: String,

    /// Free-form label; `Like New`, `Excellent` and `Good` get colored badges
    #[validate(length(min = 1, max = 40))]
    pub condition: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub material: Option<String>,

    /// Image URLs, first one is the cover
    #[serde(default)]
    #[validate(length(max = 10))]
    pub images: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 120))]
    pub location: String,

    #[serde(default)]
    #[validate(range(min = 0, max = 10000))]
    pub points_value: i64,
}

impl From<ItemRequest> for ItemDetails {
    fn from(request: ItemRequest) -> Self {
        ItemDetails {
            name: request.name,
            category: request.category,
            size: request.size,
            condition: Condition::from(request.condition),
            description: request.description,
            brand: request.brand,
            color: request.color,
            material: request.material,
            images: request.images,
            location: request.location,
            points_value: request.points_value,
        }
    }
}

/// Body of `PATCH /api/items/{id}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ItemStatus,
}

/// Query string of the item listing and catalog endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemQuery {
    pub category: Option<String>,
    pub size: Option<String>,
    pub condition: Option<String>,
    pub status: Option<String>,
    /// Case-insensitive search over name, description and brand
    pub q: Option<String>,
    pub owner_id: Option<Uuid>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ItemQuery {
    pub fn filter(&self) -> Result<ItemFilter, ValidationError> {
        let status = match self.status.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Some(s.parse::<ItemStatus>()?),
            _ => None,
        };

        Ok(ItemFilter {
            category: non_empty(&self.category),
            size: non_empty(&self.size),
            condition: non_empty(&self.condition),
            status,
            query: non_empty(&self.q),
            owner_id: self.owner_id,
        })
    }

    /// Requested page, if the client asked for paging at all
    pub fn pagination(&self) -> Option<Pagination> {
        if self.page.is_none() && self.per_page.is_none() {
            return None;
        }
        let defaults = Pagination::default();
        Some(Pagination::new(
            self.page.unwrap_or(defaults.page),
            self.per_page.unwrap_or(defaults.per_page),
        ))
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
