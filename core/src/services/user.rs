//! Member registration and lookup.

use std::sync::Arc;

use uuid::Uuid;

use rw_shared::config::AuthConfig;
use rw_shared::utils::validation::{mask_email, normalize_email};

use crate::domain::entities::user::{User, UserRole};
use crate::errors::DomainError;
use crate::repositories::UserRepository;

/// Registration settings taken from the auth configuration
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    pub admin_emails: Vec<String>,
    pub starting_points: i64,
}

impl From<&AuthConfig> for UserServiceConfig {
    fn from(auth: &AuthConfig) -> Self {
        Self {
            admin_emails: auth.admin_emails.clone(),
            starting_points: auth.starting_points,
        }
    }
}

pub struct UserService {
    users: Arc<dyn UserRepository>,
    config: UserServiceConfig,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, config: UserServiceConfig) -> Self {
        Self { users, config }
    }

    /// Registers a member, or an admin when the email is on the admin list
    pub async fn register(&self, name: &str, email: &str) -> Result<User, DomainError> {
        let normalized = normalize_email(email);
        let role = if self
            .config
            .admin_emails
            .iter()
            .any(|admin| admin.eq_ignore_ascii_case(&normalized))
        {
            UserRole::Admin
        } else {
            UserRole::Member
        };

        let user = User::new(name, email, role, self.config.starting_points)?;
        let user = self.users.create(user).await?;

        tracing::info!(
            user_id = %user.id,
            email = %mask_email(&user.email),
            role = %user.role,
            "User registered"
        );
        Ok(user)
    }

    pub async fn get(&self, id: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }
}
