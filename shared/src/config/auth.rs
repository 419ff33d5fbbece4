//! Bearer token configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "rewear-development-secret-change-me";

/// JWT signing and role assignment settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry_seconds: i64,

    /// Emails that are granted the admin role on registration
    #[serde(default)]
    pub admin_emails: Vec<String>,

    /// Points credited to every new member
    #[serde(default = "default_starting_points")]
    pub starting_points: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_SECRET.to_string(),
            token_expiry_seconds: default_token_expiry(),
            admin_emails: Vec::new(),
            starting_points: default_starting_points(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            token_expiry_seconds: std::env::var("JWT_EXPIRY_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.token_expiry_seconds),
            admin_emails: std::env::var("ADMIN_EMAILS")
                .map(|v| parse_email_list(&v))
                .unwrap_or_default(),
            starting_points: std::env::var("STARTING_POINTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.starting_points),
        }
    }

    /// Whether the given (normalized) email should receive the admin role
    pub fn is_admin_email(&self, email: &str) -> bool {
        self.admin_emails
            .iter()
            .any(|admin| admin.eq_ignore_ascii_case(email))
    }

    /// Check if using the built-in development secret
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_SECRET
    }
}

fn parse_email_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn default_token_expiry() -> i64 {
    86400 // 24 hours
}

fn default_starting_points() -> i64 {
    100
}
