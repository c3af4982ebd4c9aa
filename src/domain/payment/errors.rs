//! Payment error taxonomy.

use thiserror::Error;

use super::entity::PaymentId;

/// Shape errors in an inbound payment submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentRequestError {
    #[error("amount must be a positive number")]
    NonPositiveAmount,

    #[error("currency is required")]
    MissingCurrency,

    #[error("webhook URL is required")]
    MissingWebhookUrl,

    #[error("webhook URL must be absolute: {0}")]
    InvalidWebhookUrl(String),
}

/// Errors from the payment store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An identity collision on create. Should not occur with generated
    /// UUIDs, but the store checks rather than assumes.
    #[error("payment {0} already exists")]
    DuplicateId(PaymentId),
}

/// Errors surfaced by the payment lifecycle engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Malformed or incomplete submission; a client error.
    #[error("invalid payment request: {0}")]
    InvalidRequest(#[from] PaymentRequestError),

    /// The initial create could not complete; no background work started.
    #[error("payment store failure: {0}")]
    Store(#[from] StoreError),
}
