//! Bearer token claims.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{Actor, UserRole};
use crate::errors::TokenError;

pub const JWT_ISSUER: &str = "rewear";
pub const JWT_AUDIENCE: &str = "rewear-api";

/// Default token lifetime (24 hours)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Registered JWT claims plus the caller's role; `sub` is the user id and
/// all timestamps are Unix seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// Role at issue time; a role change takes effect on the next token
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
    pub nbf: i64,
    pub iss: String,
    pub aud: String,
    pub jti: String,
}

impl Claims {
    /// Creates claims valid from now for `expiry_seconds`
    pub fn new(user_id: Uuid, role: UserRole, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: user_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Not expired and past `nbf`
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf && now < self.exp
    }

    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// The caller identified by these claims
    pub fn actor(&self) -> Result<Actor, TokenError> {
        let user_id = self.user_id().map_err(|_| TokenError::InvalidClaims)?;
        Ok(Actor::new(user_id, self.role))
    }
}
