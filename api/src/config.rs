//! Layered configuration loading for the API server.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Plain environment variables (`SERVER_PORT`, `DATABASE_URL`, ...) over built-in defaults
//! 2. `config.<environment>.toml` in the working directory, when present
//! 3. `REWEAR__<SECTION>__<KEY>` environment variables (e.g. `REWEAR__SERVER__PORT`)

use ::config::{Config as ConfigBuilder, ConfigError, Environment as EnvSource, File, FileFormat};

use rw_shared::config::{AppConfig, Environment};

pub struct Config;

impl Config {
    /// Loads the application configuration from every source
    pub fn load() -> Result<AppConfig, ConfigError> {
        let environment = Environment::from_env();
        Self::load_from(AppConfig::from_env(), Some(environment.config_file().as_str()))
    }

    /// Layers `config_file` and `REWEAR__*` overrides on top of `base`
    pub fn load_from(base: AppConfig, config_file: Option<&str>) -> Result<AppConfig, ConfigError> {
        let base = serde_json::to_string(&base)
            .map_err(|e| ConfigError::Message(format!("Failed to encode defaults: {}", e)))?;

        let mut builder =
            ConfigBuilder::builder().add_source(File::from_str(&base, FileFormat::Json));

        if let Some(path) = config_file {
            builder = builder.add_source(File::new(path, FileFormat::Toml).required(false));
        }

        let config: AppConfig = builder
            .add_source(
                EnvSource::with_prefix("REWEAR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if config.environment.is_production() && config.auth.is_using_default_secret() {
            return Err(ConfigError::Message(
                "JWT_SECRET must be set in production".to_string(),
            ));
        }

        Ok(config)
    }
}
