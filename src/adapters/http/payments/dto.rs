//! HTTP DTOs for the payment submission API.
//!
//! The boundary between HTTP and the application layer. Inbound fields are
//! all optional; presence checks happen in the domain so a missing field and
//! an empty field produce the same client error.

use serde::{Deserialize, Serialize};

use crate::domain::payment::Payment;

/// Inbound payment submission body.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitPaymentRequest {
    /// Payment amount; must be positive.
    #[serde(default)]
    pub amount: Option<f64>,

    /// ISO-4217-like currency code.
    #[serde(default)]
    pub currency: Option<String>,

    /// Absolute URL to deliver the signed outcome to.
    #[serde(rename = "webhookUrl", default)]
    pub webhook_url: Option<String>,
}

/// Acknowledgement for an accepted submission.
///
/// The payment id is deliberately withheld; the caller learns the outcome
/// through the webhook.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitPaymentResponse {
    pub message: String,
}

impl SubmitPaymentResponse {
    pub fn accepted() -> Self {
        Self {
            message: "Payment processing initiated".to_string(),
        }
    }
}

/// Outward view of a stored payment record.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    #[serde(flatten)]
    pub payment: Payment,
}

/// Structured error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
