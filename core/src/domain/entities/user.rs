//! User entity representing a marketplace member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use rw_shared::utils::validation::{is_valid_email, normalize_email, not_blank};

use crate::errors::ValidationError;

/// Maximum length of a display name
pub const MAX_NAME_LENGTH: usize = 80;

/// Role granted to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A regular member listing and swapping items
    #[default]
    Member,
    /// Operator with access to admin analytics
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Member => "member",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "member" => Ok(UserRole::Member),
            "admin" => Ok(UserRole::Admin),
            _ => Err(ValidationError::InvalidValue {
                field: "role".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// User entity representing a registered member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name shown on listings
    pub name: String,

    /// Normalized email address (unique)
    pub email: String,

    pub role: UserRole,

    /// Points balance used for points swaps, never negative
    pub points: i64,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance after validating name and email
    pub fn new(
        name: &str,
        email: &str,
        role: UserRole,
        starting_points: i64,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if !not_blank(name) {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            });
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::OutOfRange {
                field: "name".to_string(),
                min: 1,
                max: MAX_NAME_LENGTH as i64,
            });
        }

        let email = normalize_email(email);
        if email.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            });
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email,
            role,
            points: starting_points.max(0),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn can_afford(&self, points: i64) -> bool {
        self.points >= points
    }
}

/// The authenticated caller of a service operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl Actor {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Owners and admins may edit or remove a listing
    pub fn can_manage(&self, owner_id: Option<Uuid>) -> bool {
        self.is_admin() || owner_id == Some(self.user_id)
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_can_manage() {
        let owner = Uuid::new_v4();
        let member = Actor::new(owner, UserRole::Member);
        assert!(member.can_manage(Some(owner)));
        assert!(!member.can_manage(Some(Uuid::new_v4())));
        assert!(!member.can_manage(None));
        assert!(Actor::new(Uuid::new_v4(), UserRole::Admin).can_manage(Some(owner)));
    }

    #[test]
    fn test_new_user_creation() {
        let user = User::new(" Maya ", "Maya@ReWear.io", UserRole::Member, 100).unwrap();
        assert_eq!(user.name, "Maya");
        assert_eq!(user.email, "maya@rewear.io");
        assert_eq!(user.points, 100);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_negative_starting_points_clamped() {
        let user = User::new("Maya", "maya@rewear.io", UserRole::Member, -5).unwrap();
        assert_eq!(user.points, 0);
    }

    #[test]
    fn test_user_requires_name_and_email() {
        assert!(matches!(
            User::new("", "maya@rewear.io", UserRole::Member, 0),
            Err(ValidationError::RequiredField { .. })
        ));
        assert_eq!(
            User::new("Maya", "maya", UserRole::Member, 0),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_can_afford() {
        let user = User::new("Maya", "maya@rewear.io", UserRole::Member, 30).unwrap();
        assert!(user.can_afford(30));
        assert!(!user.can_afford(31));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
    }
}
