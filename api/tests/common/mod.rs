//! Shared setup for the API integration tests: in-memory store, test config
//! and helpers for registering users and reading JSON bodies.

#![allow(dead_code)]

use actix_web::{http::header, web};
use uuid::Uuid;

use rw_api::{AppState, Store};
use rw_core::domain::entities::user::User;
use rw_core::repositories::Repositories;
use rw_core::services::seed_catalog;
use rw_shared::config::{AppConfig, CorsConfig, StoreBackend};

pub const ADMIN_EMAIL: &str = "admin@rewear.app";
pub const STARTING_POINTS: i64 = 100;

pub struct TestContext {
    pub repos: Repositories,
    pub state: web::Data<AppState>,
    pub config: AppConfig,
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.store.backend = StoreBackend::Memory;
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.auth.admin_emails = vec![ADMIN_EMAIL.to_string()];
    config.auth.starting_points = STARTING_POINTS;
    config.cors = CorsConfig::development();
    config.server.public_base_url = "https://api.rewear.test".to_string();
    config
}

/// Fresh in-memory store with nothing in it
pub fn context() -> TestContext {
    let repos = Repositories::in_memory();
    let config = test_config();
    let state = web::Data::new(AppState::new(&repos, &config, Store::Memory));
    TestContext {
        repos,
        state,
        config,
    }
}

/// In-memory store loaded with the fixture catalog
pub async fn seeded_context() -> TestContext {
    let ctx = context();
    seed_catalog(&ctx.repos, STARTING_POINTS).await.unwrap();
    ctx
}

impl TestContext {
    /// Registers a user through the service layer and returns them with a token
    pub async fn user(&self, name: &str, email: &str) -> (User, String) {
        let user = self.state.users.register(name, email).await.unwrap();
        let token = self.state.tokens.issue(&user).unwrap().access_token;
        (user, token)
    }

    pub async fn admin(&self) -> (User, String) {
        self.user("Admin", ADMIN_EMAIL).await
    }

    /// Token for the seeded owner of `item_id`
    pub async fn owner_token(&self, item_id: Uuid) -> (User, String) {
        let item = self.repos.items.find_by_id(item_id).await.unwrap().unwrap();
        let owner = self
            .repos
            .users
            .find_by_id(item.owner_id.unwrap())
            .await
            .unwrap()
            .unwrap();
        let token = self.state.tokens.issue(&owner).unwrap().access_token;
        (owner, token)
    }
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}
