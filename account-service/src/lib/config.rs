use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Symmetric signing key for issued tokens. Process-wide, supplied once
    /// at startup; rotating it invalidates all previously issued tokens.
    pub secret: String,

    /// Token lifetime in minutes.
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,
}

fn default_token_ttl_minutes() -> i64 {
    auth_core::token::issuer::DEFAULT_TTL_MINUTES
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// A missing or empty `auth.secret` is a configuration error: the
    /// process must not serve a single request without a signing key.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__SECRET=... overrides auth.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "auth.secret must be set to a non-empty signing key".to_string(),
            ));
        }

        if self.auth.token_ttl_minutes <= 0 {
            return Err(ConfigError::Message(
                "auth.token_ttl_minutes must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
