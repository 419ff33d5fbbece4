//! Store backend configuration

use serde::{Deserialize, Serialize};

/// Which store implementation backs the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// MySQL through the SQLx pool
    #[default]
    Mysql,
    /// Process-local in-memory collections (demos and tests)
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" | "sql" => Ok(StoreBackend::Mysql),
            "memory" | "in-memory" | "mem" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid store backend: {}", s)),
        }
    }
}

/// Store selection and bootstrap behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Backend used by the API server
    #[serde(default)]
    pub backend: StoreBackend,

    /// Create missing tables on startup (MySQL only)
    #[serde(default = "default_true")]
    pub bootstrap_schema: bool,

    /// Load the demo catalog when the item collection is empty
    #[serde(default)]
    pub seed_on_start: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            bootstrap_schema: true,
            seed_on_start: false,
        }
    }
}

impl StoreConfig {
    /// Create from `STORE_BACKEND`, `STORE_BOOTSTRAP_SCHEMA` and `SEED_ON_START`
    pub fn from_env() -> Self {
        Self {
            backend: std::env::var("STORE_BACKEND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            bootstrap_schema: env_flag("STORE_BOOTSTRAP_SCHEMA").unwrap_or(true),
            seed_on_start: env_flag("SEED_ON_START").unwrap_or(false),
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn default_true() -> bool {
    true
}
