//! Catalog card view models.
//!
//! Rendering is a pure, order-preserving map from items to cards. Filtering,
//! sorting and paging happen before items reach this module.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::item::{BadgeColor, Item, ItemStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardActionKind {
    Swap,
    UsePoints,
}

/// A button on a catalog card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardAction {
    pub kind: CardActionKind,
    pub label: &'static str,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_value: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogCard {
    pub id: Uuid,
    /// First image of the listing
    pub image: Option<String>,
    pub name: String,
    pub condition: String,
    pub badge_color: BadgeColor,
    pub description: String,
    pub size: String,
    pub category: String,
    pub owner: String,
    pub location: String,
    pub status: ItemStatus,
    pub actions: Vec<CardAction>,
}

impl From<&Item> for CatalogCard {
    fn from(item: &Item) -> Self {
        let enabled = item.is_available();

        Self {
            id: item.id,
            image: item.cover_image().map(str::to_string),
            name: item.name.clone(),
            condition: item.condition.label().to_string(),
            badge_color: item.condition.badge_color(),
            description: item.description.clone(),
            size: item.size.clone(),
            category: item.category.clone(),
            owner: item.owner_name.clone(),
            location: item.location.clone(),
            status: item.status,
            actions: vec![
                CardAction {
                    kind: CardActionKind::Swap,
                    label: "Swap",
                    enabled,
                    points_value: None,
                },
                CardAction {
                    kind: CardActionKind::UsePoints,
                    label: "Use Points",
                    enabled,
                    points_value: Some(item.points_value),
                },
            ],
        }
    }
}

/// One card per item, in input order
pub fn render_cards(items: &[Item]) -> Vec<CatalogCard> {
    items.iter().map(CatalogCard::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::item::{Condition, ItemDetails};

    fn item(name: &str, condition: &str, images: Vec<&str>) -> Item {
        Item::new(
            ItemDetails {
                name: name.to_string(),
                category: "Tops".to_string(),
                size: "S".to_string(),
                condition: Condition::from(condition),
                description: format!("{name} description"),
                brand: None,
                color: None,
                material: None,
                images: images.into_iter().map(str::to_string).collect(),
                location: "Bristol".to_string(),
                points_value: 20,
            },
            None,
            "Robin",
        )
    }

    #[test]
    fn test_one_card_per_item_in_order() {
        let items = vec![
            item("A", "Like New", vec!["https://img.example.com/a1.jpg", "https://img.example.com/a2.jpg"]),
            item("B", "Excellent", vec![]),
            item("C", "Good", vec!["https://img.example.com/c1.jpg"]),
            item("D", "Fair", vec![]),
            item("E", "Mended", vec![]),
        ];

        let cards = render_cards(&items);
        assert_eq!(cards.len(), 5);
        assert_eq!(
            cards.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C", "D", "E"]
        );
        assert_eq!(
            cards.iter().map(|c| c.badge_color).collect::<Vec<_>>(),
            vec![
                BadgeColor::Green,
                BadgeColor::Blue,
                BadgeColor::Yellow,
                BadgeColor::Gray,
                BadgeColor::Gray
            ]
        );
    }

    #[test]
    fn test_card_uses_first_image() {
        let cards = render_cards(&[item(
            "A",
            "Good",
            vec!["https://img.example.com/first.jpg", "https://img.example.com/second.jpg"],
        )]);
        assert_eq!(cards[0].image.as_deref(), Some("https://img.example.com/first.jpg"));

        let cards = render_cards(&[item("B", "Good", vec![])]);
        assert!(cards[0].image.is_none());
    }

    #[test]
    fn test_actions_disabled_when_not_available() {
        let mut reserved = item("A", "Good", vec![]);
        reserved.status = ItemStatus::Reserved;

        let card = CatalogCard::from(&reserved);
        assert!(card.actions.iter().all(|a| !a.enabled));

        let card = CatalogCard::from(&item("B", "Good", vec![]));
        assert!(card.actions.iter().all(|a| a.enabled));
        assert_eq!(card.actions[1].kind, CardActionKind::UsePoints);
        assert_eq!(card.actions[1].points_value, Some(20));
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert!(render_cards(&[]).is_empty());
    }
}
