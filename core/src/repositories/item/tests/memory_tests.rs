//! Unit tests for the in-memory item repository

use uuid::Uuid;

use rw_shared::types::Pagination;

use crate::domain::entities::item::{Condition, Item, ItemDetails, ItemFilter, ItemStatus};
use crate::errors::DomainError;
use crate::repositories::item::{InMemoryItemRepository, ItemRepository};

fn listing(name: &str, category: &str) -> Item {
    Item::new(
        ItemDetails {
            name: name.to_string(),
            category: category.to_string(),
            size: "M".to_string(),
            condition: Condition::Good,
            description: String::new(),
            brand: None,
            color: None,
            material: None,
            images: vec![],
            location: "Leeds".to_string(),
            points_value: 10,
        },
        Some(Uuid::new_v4()),
        "Owner",
    )
}

#[tokio::test]
async fn test_create_and_find_preserves_order() {
    let repo = InMemoryItemRepository::new();
    let first = repo.create(listing("Coat", "Outerwear")).await.unwrap();
    let second = repo.create(listing("Shirt", "Tops")).await.unwrap();

    let all = repo.find_all(&ItemFilter::default()).await.unwrap();
    assert_eq!(all.iter().map(|i| i.id).collect::<Vec<_>>(), vec![first.id, second.id]);

    let found = repo.find_by_id(second.id).await.unwrap();
    assert_eq!(found.map(|i| i.name), Some("Shirt".to_string()));
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_applies_filter() {
    let repo = InMemoryItemRepository::new();
    repo.create(listing("Coat", "Outerwear")).await.unwrap();
    repo.create(listing("Shirt", "Tops")).await.unwrap();

    let filter = ItemFilter {
        category: Some("tops".to_string()),
        ..Default::default()
    };
    let tops = repo.find_all(&filter).await.unwrap();
    assert_eq!(tops.len(), 1);
    assert_eq!(tops[0].name, "Shirt");
}

#[tokio::test]
async fn test_find_page_reports_total() {
    let repo = InMemoryItemRepository::new();
    for n in 0..5 {
        repo.create(listing(&format!("Item {n}"), "Tops")).await.unwrap();
    }

    let (page, total) = repo
        .find_page(&ItemFilter::default(), Pagination::new(2, 2))
        .await
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(page.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(), vec!["Item 2", "Item 3"]);
}

#[tokio::test]
async fn test_update_missing_item_is_not_found() {
    let repo = InMemoryItemRepository::new();
    let result = repo.update(listing("Ghost", "Tops")).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_keeps_stored_status() {
    let repo = InMemoryItemRepository::new();
    let item = repo.create(listing("Coat", "Outerwear")).await.unwrap();
    let mut stale = item.clone();

    repo.transition_status(item.id, ItemStatus::Available, ItemStatus::Reserved)
        .await
        .unwrap();

    stale.name = "Coat (relisted)".to_string();
    let updated = repo.update(stale).await.unwrap();
    assert_eq!(updated.name, "Coat (relisted)");
    assert_eq!(updated.status, ItemStatus::Reserved);

    let stored = repo.find_by_id(item.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ItemStatus::Reserved);
}

#[tokio::test]
async fn test_transition_status_is_conditional() {
    let repo = InMemoryItemRepository::new();
    let item = repo.create(listing("Coat", "Outerwear")).await.unwrap();

    assert!(repo
        .transition_status(item.id, ItemStatus::Available, ItemStatus::Reserved)
        .await
        .unwrap());
    // Already reserved
    assert!(!repo
        .transition_status(item.id, ItemStatus::Available, ItemStatus::Reserved)
        .await
        .unwrap());

    let stored = repo.find_by_id(item.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ItemStatus::Reserved);
}

#[tokio::test]
async fn test_delete() {
    let repo = InMemoryItemRepository::new();
    let item = repo.create(listing("Coat", "Outerwear")).await.unwrap();

    assert!(repo.delete(item.id).await.unwrap());
    assert!(!repo.delete(item.id).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);
}
