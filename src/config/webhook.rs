//! Webhook configuration
//!
//! The shared signing secret and the timing knobs of the payment lifecycle.
//! An absent secret is deliberately not a load-time failure: the server must
//! come up and report the problem per delivery (the notifier refuses to send
//! unsigned callbacks, the receiver rejects with a configuration error).

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Webhook signing and delivery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Shared HMAC secret, known to sender and receiver out of band
    #[serde(default)]
    pub secret: Option<SecretString>,

    /// Outbound delivery timeout in seconds
    #[serde(default = "default_delivery_timeout")]
    pub delivery_timeout_secs: u64,

    /// Simulated processing delay in milliseconds
    #[serde(default = "default_processing_delay")]
    pub processing_delay_ms: u64,
}

impl WebhookConfig {
    /// The signing secret, treating an empty string as unset.
    pub fn signing_secret(&self) -> Option<&SecretString> {
        self.secret
            .as_ref()
            .filter(|s| !s.expose_secret().is_empty())
    }

    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_secs(self.delivery_timeout_secs)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.delivery_timeout_secs == 0 || self.delivery_timeout_secs > 120 {
            return Err(ValidationError::InvalidDeliveryTimeout);
        }
        if self.processing_delay_ms > 60_000 {
            return Err(ValidationError::InvalidProcessingDelay);
        }
        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            secret: None,
            delivery_timeout_secs: default_delivery_timeout(),
            processing_delay_ms: default_processing_delay(),
        }
    }
}

fn default_delivery_timeout() -> u64 {
    10
}

fn default_processing_delay() -> u64 {
    3000
}
