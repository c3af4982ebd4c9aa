//! Webhook notifier port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::payment::Payment;

/// Delivers a signed payment outcome to the record's webhook URL.
///
/// Delivery is best-effort: callers log failures and move on. There is no
/// retry path in the current design.
#[async_trait]
pub trait WebhookNotifier: Send + Sync {
    /// Serializes, signs, and POSTs the record to its webhook URL.
    async fn notify(&self, payment: &Payment) -> Result<(), DeliveryError>;
}

/// Failures while delivering a webhook. Logged-only; nothing upstream is
/// waiting on the delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// No signing secret is configured; the callback cannot be
    /// authenticated and is not sent.
    #[error("webhook secret is not configured")]
    MissingSecret,

    /// The record could not be serialized into a payload.
    #[error("failed to build webhook payload: {0}")]
    Payload(String),

    /// Network failure or timeout reaching the endpoint.
    #[error("webhook request failed: {0}")]
    Transport(String),

    /// The endpoint answered outside the 2xx range.
    #[error("webhook endpoint returned status {0}")]
    UnexpectedStatus(u16),
}
