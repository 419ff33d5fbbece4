//! Configuration for the token service

use jsonwebtoken::Algorithm;

use rw_shared::config::AuthConfig;

use crate::domain::entities::token::DEFAULT_TOKEN_EXPIRY_SECONDS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token lifetime in seconds
    pub expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
            ..Self::from(&AuthConfig::default())
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(auth: &AuthConfig) -> Self {
        Self {
            jwt_secret: auth.jwt_secret.clone(),
            algorithm: Algorithm::HS256,
            expiry_seconds: auth.token_expiry_seconds,
        }
    }
}
