//! Unit tests for the in-memory user repository

use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{DomainError, SwapError};
use crate::repositories::user::{InMemoryUserRepository, UserRepository};

fn member(email: &str, points: i64) -> User {
    User::new("Test Member", email, UserRole::Member, points).unwrap()
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryUserRepository::new();
    let user = repo.create(member("ana@example.com", 100)).await.unwrap();

    assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(user.clone()));
    assert_eq!(repo.find_by_email("ana@example.com").await.unwrap(), Some(user));
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let repo = InMemoryUserRepository::new();
    repo.create(member("ana@example.com", 100)).await.unwrap();

    let result = repo.create(member("Ana@Example.com", 100)).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_transfer_points_moves_balance() {
    let repo = InMemoryUserRepository::new();
    let payer = repo.create(member("payer@example.com", 100)).await.unwrap();
    let payee = repo.create(member("payee@example.com", 5)).await.unwrap();

    repo.transfer_points(payer.id, payee.id, 40).await.unwrap();

    assert_eq!(repo.find_by_id(payer.id).await.unwrap().unwrap().points, 60);
    assert_eq!(repo.find_by_id(payee.id).await.unwrap().unwrap().points, 45);
}

#[tokio::test]
async fn test_transfer_points_insufficient_leaves_balances() {
    let repo = InMemoryUserRepository::new();
    let payer = repo.create(member("payer@example.com", 10)).await.unwrap();
    let payee = repo.create(member("payee@example.com", 0)).await.unwrap();

    let result = repo.transfer_points(payer.id, payee.id, 40).await;
    assert!(matches!(
        result,
        Err(DomainError::Swap(SwapError::InsufficientPoints { required: 40, available: 10 }))
    ));
    assert_eq!(repo.find_by_id(payer.id).await.unwrap().unwrap().points, 10);
    assert_eq!(repo.find_by_id(payee.id).await.unwrap().unwrap().points, 0);
}

#[tokio::test]
async fn test_transfer_points_unknown_user() {
    let repo = InMemoryUserRepository::new();
    let payer = repo.create(member("payer@example.com", 10)).await.unwrap();

    let result = repo.transfer_points(payer.id, Uuid::new_v4(), 5).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
