//! Item entity representing a clothing article listed for swapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use rw_shared::utils::validation::{is_valid_url, not_blank};

use crate::errors::ValidationError;

/// Maximum number of images attached to a single listing
pub const MAX_IMAGES: usize = 10;

/// Upper bound for the points price of a listing
pub const MAX_POINTS_VALUE: i64 = 10_000;

/// Condition of a listed item
///
/// The storefront recognises four grades; any other text entered by a seller
/// is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    LikeNew,
    Excellent,
    Good,
    Fair,
    Other(String),
}

impl Condition {
    /// Display label as shown on the condition badge
    pub fn label(&self) -> &str {
        match self {
            Condition::LikeNew => "Like New",
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Other(text) => text,
        }
    }

    /// Colour of the condition badge on catalog cards
    pub fn badge_color(&self) -> BadgeColor {
        match self {
            Condition::LikeNew => BadgeColor::Green,
            Condition::Excellent => BadgeColor::Blue,
            Condition::Good => BadgeColor::Yellow,
            _ => BadgeColor::Gray,
        }
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        match value.trim() {
            "Like New" => Condition::LikeNew,
            "Excellent" => Condition::Excellent,
            "Good" => Condition::Good,
            "Fair" => Condition::Fair,
            other => Condition::Other(other.to_string()),
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Condition::from(value.to_string())
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Badge colours used by the catalog grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Blue,
    Yellow,
    Gray,
}

/// Listing availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Open for swap requests
    #[default]
    Available,
    /// Part of a pending swap
    Reserved,
    /// Withdrawn by the owner
    Unavailable,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Available => "available",
            ItemStatus::Reserved => "reserved",
            ItemStatus::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(ItemStatus::Available),
            "reserved" => Ok(ItemStatus::Reserved),
            "unavailable" => Ok(ItemStatus::Unavailable),
            _ => Err(ValidationError::InvalidValue {
                field: "status".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Seller-provided listing details, used for both creation and edits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub name: String,
    pub category: String,
    pub size: String,
    pub condition: Condition,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub points_value: i64,
}

impl ItemDetails {
    /// Check the listing rules shared by create and edit
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("size", &self.size),
        ] {
            if !not_blank(value) {
                return Err(ValidationError::RequiredField {
                    field: field.to_string(),
                });
            }
        }

        if !not_blank(self.condition.label()) {
            return Err(ValidationError::RequiredField {
                field: "condition".to_string(),
            });
        }

        if self.images.len() > MAX_IMAGES {
            return Err(ValidationError::TooMany {
                field: "images".to_string(),
                max: MAX_IMAGES,
            });
        }

        if self.images.iter().any(|url| !is_valid_url(url)) {
            return Err(ValidationError::InvalidUrl {
                field: "images".to_string(),
            });
        }

        if !(0..=MAX_POINTS_VALUE).contains(&self.points_value) {
            return Err(ValidationError::OutOfRange {
                field: "points_value".to_string(),
                min: 0,
                max: MAX_POINTS_VALUE,
            });
        }

        Ok(())
    }
}

/// A listed clothing article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the item
    pub id: Uuid,

    pub name: String,
    pub category: String,
    pub size: String,
    pub condition: Condition,
    pub description: String,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,

    /// Image URLs in display order
    pub images: Vec<String>,

    pub location: String,

    /// Owning member, if the listing is tied to an account
    pub owner_id: Option<Uuid>,

    /// Owner display name captured when the item was listed
    pub owner_name: String,

    /// Price when claimed with points instead of an item swap
    pub points_value: i64,

    pub status: ItemStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new available listing
    pub fn new(details: ItemDetails, owner_id: Option<Uuid>, owner_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: details.name.trim().to_string(),
            category: details.category.trim().to_string(),
            size: details.size.trim().to_string(),
            condition: details.condition,
            description: details.description,
            brand: details.brand,
            color: details.color,
            material: details.material,
            images: details.images,
            location: details.location.trim().to_string(),
            owner_id,
            owner_name: owner_name.into(),
            points_value: details.points_value,
            status: ItemStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the seller-editable fields
    pub fn apply(&mut self, details: ItemDetails) {
        self.name = details.name.trim().to_string();
        self.category = details.category.trim().to_string();
        self.size = details.size.trim().to_string();
        self.condition = details.condition;
        self.description = details.description;
        self.brand = details.brand;
        self.color = details.color;
        self.material = details.material;
        self.images = details.images;
        self.location = details.location.trim().to_string();
        self.points_value = details.points_value;
        self.updated_at = Utc::now();
    }

    pub fn is_available(&self) -> bool {
        self.status == ItemStatus::Available
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == Some(user_id)
    }

    /// First image, used as the card thumbnail
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Catalog query filters; `None` fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilter {
    pub category: Option<String>,
    pub size: Option<String>,
    pub condition: Option<String>,
    pub status: Option<ItemStatus>,
    /// Case-insensitive substring over name, description and brand
    pub query: Option<String>,
    pub owner_id: Option<Uuid>,
}

impl ItemFilter {
    pub fn is_empty(&self) -> bool {
        *self == ItemFilter::default()
    }

    pub fn matches(&self, item: &Item) -> bool {
        fn eq_ci(expected: &Option<String>, actual: &str) -> bool {
            expected
                .as_deref()
                .map_or(true, |e| e.eq_ignore_ascii_case(actual))
        }

        if !eq_ci(&self.category, &item.category)
            || !eq_ci(&self.size, &item.size)
            || !eq_ci(&self.condition, item.condition.label())
        {
            return false;
        }

        if self.status.is_some_and(|s| s != item.status) {
            return false;
        }

        if self.owner_id.is_some() && self.owner_id != item.owner_id {
            return false;
        }

        match self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => {
                let q = q.to_lowercase();
                item.name.to_lowercase().contains(&q)
                    || item.description.to_lowercase().contains(&q)
                    || item
                        .brand
                        .as_deref()
                        .is_some_and(|b| b.to_lowercase().contains(&q))
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ItemDetails {
        ItemDetails {
            name: "Denim Jacket".to_string(),
            category: "Outerwear".to_string(),
            size: "M".to_string(),
            condition: Condition::LikeNew,
            description: "Classic blue denim".to_string(),
            brand: Some("Levi's".to_string()),
            color: Some("Blue".to_string()),
            material: Some("Cotton".to_string()),
            images: vec![
                "https://images.rewear.app/denim-1.jpg".to_string(),
                "https://images.rewear.app/denim-2.jpg".to_string(),
            ],
            location: "Portland, OR".to_string(),
            points_value: 40,
        }
    }

    #[test]
    fn test_condition_badge_mapping() {
        assert_eq!(Condition::from("Like New").badge_color(), BadgeColor::Green);
        assert_eq!(Condition::from("Excellent").badge_color(), BadgeColor::Blue);
        assert_eq!(Condition::from("Good").badge_color(), BadgeColor::Yellow);
        assert_eq!(Condition::from("Fair").badge_color(), BadgeColor::Gray);
        assert_eq!(Condition::from("Vintage wear").badge_color(), BadgeColor::Gray);
    }

    #[test]
    fn test_condition_serializes_as_label() {
        let json = serde_json::to_string(&Condition::LikeNew).unwrap();
        assert_eq!(json, "\"Like New\"");

        let parsed: Condition = serde_json::from_str("\"Well loved\"").unwrap();
        assert_eq!(parsed, Condition::Other("Well loved".to_string()));
    }

    #[test]
    fn test_new_item_is_available() {
        let owner = Uuid::new_v4();
        let item = Item::new(details(), Some(owner), "Maya");
        assert!(item.is_available());
        assert!(item.is_owned_by(owner));
        assert_eq!(item.cover_image(), Some("https://images.rewear.app/denim-1.jpg"));
    }

    #[test]
    fn test_validate_requires_name() {
        let mut d = details();
        d.name = "   ".to_string();
        assert_eq!(
            d.validate(),
            Err(ValidationError::RequiredField {
                field: "name".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_image_url() {
        let mut d = details();
        d.images.push("file:///etc/passwd".to_string());
        assert!(matches!(d.validate(), Err(ValidationError::InvalidUrl { .. })));
    }

    #[test]
    fn test_validate_rejects_too_many_images() {
        let mut d = details();
        d.images = vec!["https://images.rewear.app/x.jpg".to_string(); MAX_IMAGES + 1];
        assert!(matches!(d.validate(), Err(ValidationError::TooMany { .. })));
    }

    #[test]
    fn test_validate_points_range() {
        let mut d = details();
        d.points_value = -1;
        assert!(matches!(d.validate(), Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_filter_matches() {
        let item = Item::new(details(), None, "Maya");

        assert!(ItemFilter::default().matches(&item));
        assert!(ItemFilter {
            category: Some("outerwear".to_string()),
            ..Default::default()
        }
        .matches(&item));
        assert!(ItemFilter {
            query: Some("levi".to_string()),
            ..Default::default()
        }
        .matches(&item));
        assert!(!ItemFilter {
            size: Some("XL".to_string()),
            ..Default::default()
        }
        .matches(&item));
        assert!(!ItemFilter {
            status: Some(ItemStatus::Reserved),
            ..Default::default()
        }
        .matches(&item));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Reserved".parse::<ItemStatus>().unwrap(), ItemStatus::Reserved);
        assert!("sold".parse::<ItemStatus>().is_err());
    }
}
