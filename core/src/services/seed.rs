//! Loads the fixture catalog into an empty store.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::item::Item;
use crate::domain::entities::user::{User, UserRole};
use crate::domain::fixtures::fixture_items;
use crate::errors::DomainError;
use crate::repositories::Repositories;

const SEED_EMAIL_DOMAIN: &str = "seed.rewear.app";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub users_created: usize,
    pub items_created: usize,
    /// True when the catalog already had items and nothing was written
    pub skipped: bool,
}

/// Seeds fixture sellers and their listings when the catalog is empty
///
/// Sellers that already exist (matched by their fixture email) are reused, so
/// a partially seeded store can be completed by running the seed again.
pub async fn seed_catalog(
    repos: &Repositories,
    starting_points: i64,
) -> Result<SeedReport, DomainError> {
    if repos.items.count().await? > 0 {
        tracing::info!("Catalog already populated, skipping seed");
        return Ok(SeedReport {
            skipped: true,
            ..Default::default()
        });
    }

    let mut report = SeedReport::default();
    let mut sellers: HashMap<&'static str, Uuid> = HashMap::new();

    for fixture in fixture_items() {
        let owner_id = match sellers.get(fixture.owner_name) {
            Some(id) => *id,
            None => {
                let id = seller(repos, fixture.owner_name, starting_points, &mut report).await?;
                sellers.insert(fixture.owner_name, id);
                id
            }
        };

        repos
            .items
            .create(Item::new(fixture.details, Some(owner_id), fixture.owner_name))
            .await?;
        report.items_created += 1;
    }

    tracing::info!(
        users = report.users_created,
        items = report.items_created,
        "Seeded fixture catalog"
    );
    Ok(report)
}

async fn seller(
    repos: &Repositories,
    name: &str,
    starting_points: i64,
    report: &mut SeedReport,
) -> Result<Uuid, DomainError> {
    let email = seed_email(name);
    if let Some(existing) = repos.users.find_by_email(&email).await? {
        return Ok(existing.id);
    }

    let user = User::new(name, &email, UserRole::Member, starting_points)?;
    let user = repos.users.create(user).await?;
    report.users_created += 1;
    Ok(user.id)
}

/// `Maya Chen` -> `maya.chen@seed.rewear.app`
fn seed_email(name: &str) -> String {
    let local = name
        .split_whitespace()
        .map(|part| {
            part.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".");
    format!("{}@{}", local, SEED_EMAIL_DOMAIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::item::ItemFilter;

    #[test]
    fn test_seed_email() {
        assert_eq!(seed_email("Maya Chen"), "maya.chen@seed.rewear.app");
        assert_eq!(seed_email("Ava  O'Neil"), "ava.oneil@seed.rewear.app");
    }

    #[tokio::test]
    async fn test_seed_empty_store() {
        let repos = Repositories::in_memory();

        let report = seed_catalog(&repos, 100).await.unwrap();
        assert_eq!(report.items_created, 15);
        assert!(report.users_created > 0);
        assert!(!report.skipped);

        let items = repos.items.find_all(&ItemFilter::default()).await.unwrap();
        assert_eq!(items.len(), 15);
        for item in &items {
            assert_eq!(item.images.len(), 2);
            assert!(!item.location.is_empty());
            assert!(item.owner_id.is_some());
        }
    }

    #[tokio::test]
    async fn test_seed_is_skipped_when_populated() {
        let repos = Repositories::in_memory();
        seed_catalog(&repos, 100).await.unwrap();

        let report = seed_catalog(&repos, 100).await.unwrap();
        assert!(report.skipped);
        assert_eq!(repos.items.count().await.unwrap(), 15);
    }
}
