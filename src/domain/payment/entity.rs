//! Payment entities: the validated inbound request and the stored record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::PaymentRequestError;
use super::status::PaymentStatus;

/// Opaque payment identity, assigned exactly once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    /// Generates a fresh unique identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PaymentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Validated payment submission. Consumed once to build a [`Payment`].
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub amount: f64,
    pub currency: String,
    pub webhook_url: String,
}

impl PaymentRequest {
    /// Builds a request from raw inbound fields, checking presence and shape.
    ///
    /// Deep validation (currency registry lookups, URL reachability) is out
    /// of scope; this rejects the empty/missing/nonsensical cases.
    pub fn new(
        amount: f64,
        currency: impl Into<String>,
        webhook_url: impl Into<String>,
    ) -> Result<Self, PaymentRequestError> {
        let currency = currency.into();
        let webhook_url = webhook_url.into();

        if !amount.is_finite() || amount <= 0.0 {
            return Err(PaymentRequestError::NonPositiveAmount);
        }
        if currency.trim().is_empty() {
            return Err(PaymentRequestError::MissingCurrency);
        }
        if webhook_url.trim().is_empty() {
            return Err(PaymentRequestError::MissingWebhookUrl);
        }
        if !webhook_url.starts_with("http://") && !webhook_url.starts_with("https://") {
            return Err(PaymentRequestError::InvalidWebhookUrl(webhook_url));
        }

        Ok(Self {
            amount,
            currency,
            webhook_url,
        })
    }
}

/// The internal payment record.
///
/// The webhook URL is delivery metadata, not payment data: it is retained
/// for the notifier but never serialized into any outward representation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub status: PaymentStatus,
    pub amount: f64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub webhook_url: String,
}

impl Payment {
    /// Constructs a `Pending` record from a validated request, consuming it.
    pub fn from_request(id: PaymentId, request: PaymentRequest) -> Self {
        Self {
            id,
            status: PaymentStatus::Pending,
            amount: request.amount,
            currency: request.currency,
            created_at: Utc::now(),
            webhook_url: request.webhook_url,
        }
    }
}
