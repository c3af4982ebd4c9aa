//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `PAYFLOW` prefix
//! and `__` (double underscore) separating nested sections.
//!
//! # Example
//!
//! ```no_run
//! use payflow::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod receiver;
mod server;
mod webhook;

pub use error::{ConfigError, ValidationError};
pub use receiver::ReceiverConfig;
pub use server::ServerConfig;
pub use webhook::WebhookConfig;

use serde::Deserialize;

/// Root application configuration, shared by both binaries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Payment server (host, port, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Webhook signing secret and lifecycle timing
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Webhook receiver endpoint
    #[serde(default)]
    pub receiver: ReceiverConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file if present (development), then environment
    /// variables such as:
    ///
    /// - `PAYFLOW__SERVER__PORT=8080` -> `server.port`
    /// - `PAYFLOW__WEBHOOK__SECRET=...` -> `webhook.secret`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when values cannot be parsed into the typed
    /// sections. An absent webhook secret is not a load error; see
    /// [`WebhookConfig`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAYFLOW")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.webhook.validate()?;
        self.receiver.validate()?;
        Ok(())
    }
}
