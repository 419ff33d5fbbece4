//! Integration tests running the marketplace services together over the
//! in-memory store

use rw_core::domain::entities::item::{ItemFilter, ItemStatus};
use rw_core::domain::entities::swap::SwapStatus;
use rw_core::domain::entities::user::{Actor, User};
use rw_core::errors::{DomainError, SwapError};
use rw_core::repositories::Repositories;
use rw_core::services::{
    seed_catalog, CatalogService, SwapRequest, SwapService, UserService, UserServiceConfig,
};

const STARTING_POINTS: i64 = 100;

struct Marketplace {
    repos: Repositories,
    catalog: CatalogService,
    swaps: SwapService,
    users: UserService,
}

async fn marketplace() -> Marketplace {
    let repos = Repositories::in_memory();
    seed_catalog(&repos, STARTING_POINTS).await.unwrap();

    Marketplace {
        catalog: CatalogService::new(repos.items.clone(), repos.users.clone()),
        swaps: SwapService::new(repos.items.clone(), repos.users.clone(), repos.swaps.clone()),
        users: UserService::new(
            repos.users.clone(),
            UserServiceConfig {
                admin_emails: vec![],
                starting_points: STARTING_POINTS,
            },
        ),
        repos,
    }
}

fn actor(user: &User) -> Actor {
    Actor::new(user.id, user.role)
}

async fn total_points(market: &Marketplace, users: &[&User]) -> i64 {
    let mut total = 0;
    for user in users {
        total += market.users.get(user.id).await.unwrap().points;
    }
    total
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let market = marketplace().await;
    let report = seed_catalog(&market.repos, STARTING_POINTS).await.unwrap();

    assert!(report.skipped);
    assert_eq!(market.repos.items.count().await.unwrap(), 15);
    assert_eq!(market.repos.users.count().await.unwrap(), 6);
}

#[tokio::test]
async fn test_points_are_conserved_across_swaps() {
    let market = marketplace().await;
    let buyer = market.users.register("Buyer", "buyer@example.com").await.unwrap();

    let items = market.catalog.list(&ItemFilter::default()).await.unwrap();
    let scarf = items.iter().find(|i| i.name == "Silk Scarf").unwrap().clone();
    let owner = market.users.get(scarf.owner_id.unwrap()).await.unwrap();
    let before = total_points(&market, &[&buyer, &owner]).await;

    let swap = market
        .swaps
        .request(
            actor(&buyer),
            SwapRequest {
                requested_item_id: scarf.id,
                offered_item_id: None,
                use_points: true,
            },
        )
        .await
        .unwrap();
    let swap = market.swaps.accept(actor(&owner), swap.id).await.unwrap();

    assert_eq!(swap.status, SwapStatus::Accepted);
    assert_eq!(total_points(&market, &[&buyer, &owner]).await, before);
    assert!(matches!(
        market.catalog.get(scarf.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_reserved_item_cannot_be_requested_twice() {
    let market = marketplace().await;
    let first = market.users.register("First", "first@example.com").await.unwrap();
    let second = market.users.register("Second", "second@example.com").await.unwrap();

    let items = market.catalog.list(&ItemFilter::default()).await.unwrap();
    let vest = items.iter().find(|i| i.name == "Puffer Vest").unwrap().clone();

    let request = SwapRequest {
        requested_item_id: vest.id,
        offered_item_id: None,
        use_points: true,
    };
    market.swaps.request(actor(&first), request.clone()).await.unwrap();

    let err = market.swaps.request(actor(&second), request).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Swap(SwapError::ItemNotAvailable { .. })
    ));
    assert_eq!(
        market.catalog.get(vest.id).await.unwrap().status,
        ItemStatus::Reserved
    );
}

#[tokio::test]
async fn test_late_edit_does_not_free_a_reserved_item() {
    let market = marketplace().await;
    let first = market.users.register("First", "first@example.com").await.unwrap();
    let second = market.users.register("Second", "second@example.com").await.unwrap();

    let items = market.catalog.list(&ItemFilter::default()).await.unwrap();
    let tee = items.iter().find(|i| i.name == "Graphic Band Tee").unwrap().clone();

    let request = SwapRequest {
        requested_item_id: tee.id,
        offered_item_id: None,
        use_points: true,
    };
    market.swaps.request(actor(&first), request.clone()).await.unwrap();

    // copy read before the reservation lands afterwards
    let mut stale = tee.clone();
    stale.description = "Tour shirt, print intact.".to_string();
    let written = market.repos.items.update(stale).await.unwrap();
    assert_eq!(written.status, ItemStatus::Reserved);

    let err = market.swaps.request(actor(&second), request).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Swap(SwapError::ItemNotAvailable { .. })
    ));
}
