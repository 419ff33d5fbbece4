//! Newsletter subscriber entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rw_shared::utils::validation::{is_valid_email, normalize_email};

use crate::errors::ValidationError;

/// An email address registered for newsletter updates
///
/// Subscribers are append-only: created once per distinct address and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: Uuid,

    /// Normalized (trimmed, lower-case) email address
    pub email: String,

    pub subscribed_at: DateTime<Utc>,
}

impl Subscriber {
    /// Validates and normalizes the address, then builds a new subscriber
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            });
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            email,
            subscribed_at: Utc::now(),
        })
    }
}
