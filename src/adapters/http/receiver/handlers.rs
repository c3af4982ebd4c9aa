//! Webhook receiver handlers: the inbound signature gate.
//!
//! The gate reads the raw body bytes before any parsing, recomputes the
//! signature, and only hands verified payloads to application handling.
//! Outcomes stay distinguishable: missing header (401), wrong signature
//! (403), unconfigured secret (500).

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::domain::payment::PaymentStatus;
use crate::domain::signature::{SignatureError, WebhookSigner, SIGNATURE_HEADER};

use super::super::payments::ErrorResponse;

/// Shared state for the receiver. `signer` is `None` when no secret is
/// configured; every delivery then fails as a configuration error rather
/// than being silently accepted.
#[derive(Clone)]
pub struct ReceiverAppState {
    pub signer: Option<Arc<WebhookSigner>>,
}

/// Payment outcome delivery as the receiver decodes it.
///
/// Semi-structured on purpose: every field is optional with explicit
/// presence checks, so a divergent sender shows up in the logs instead of
/// failing the whole delivery.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookDelivery {
    pub id: Option<String>,
    pub status: Option<PaymentStatus>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
}

/// POST /webhook - verify and acknowledge a payment outcome delivery.
pub async fn receive_webhook(
    State(state): State<ReceiverAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, GateError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(SignatureError::MissingSignature)?;

    let signer = state.signer.as_ref().ok_or(SignatureError::MissingSecret)?;
    signer.verify(&body, signature)?;

    // Only verified payloads reach this point.
    let delivery: WebhookDelivery =
        serde_json::from_slice(&body).map_err(|e| GateError::MalformedPayload(e.to_string()))?;

    match (&delivery.id, &delivery.status) {
        (Some(id), Some(status)) => {
            tracing::info!(payment_id = %id, status = %status,
                amount = delivery.amount, currency = delivery.currency.as_deref(),
                "verified payment notification received");
        }
        _ => {
            tracing::warn!(body_len = body.len(),
                "verified delivery missing id or status field");
        }
    }

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Webhook received" })),
    ))
}

/// GET /health - liveness probe.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Gate rejection, mapped to the response contract.
#[derive(Debug)]
pub enum GateError {
    Signature(SignatureError),
    MalformedPayload(String),
}

impl From<SignatureError> for GateError {
    fn from(err: SignatureError) -> Self {
        Self::Signature(err)
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match &self {
            GateError::Signature(err) => {
                match err {
                    SignatureError::MissingSecret => {
                        tracing::error!("webhook secret is not configured, rejecting delivery");
                    }
                    _ => {
                        tracing::warn!(error = %err, "rejecting webhook delivery");
                    }
                }
                let code = match err {
                    SignatureError::MissingSignature => "MISSING_SIGNATURE",
                    SignatureError::InvalidSignature => "INVALID_SIGNATURE",
                    SignatureError::MissingSecret => "CONFIGURATION_ERROR",
                };
                // Configuration details stay server-side.
                let message = match err {
                    SignatureError::MissingSecret => "Internal server error".to_string(),
                    other => other.to_string(),
                };
                (err.status_code(), code, message)
            }
            GateError::MalformedPayload(detail) => {
                tracing::warn!(error = %detail, "verified delivery had malformed payload");
                (
                    StatusCode::BAD_REQUEST,
                    "MALFORMED_PAYLOAD",
                    "Request body is not a valid delivery".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_decodes_full_payload() {
        let delivery: WebhookDelivery = serde_json::from_str(
            r#"{"id":"abc","status":"PROCESSED","amount":100.0,"currency":"USD"}"#,
        )
        .unwrap();
        assert_eq!(delivery.id.as_deref(), Some("abc"));
        assert_eq!(delivery.status, Some(PaymentStatus::Processed));
        assert_eq!(delivery.amount, Some(100.0));
        assert_eq!(delivery.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn delivery_tolerates_unknown_and_missing_fields() {
        let delivery: WebhookDelivery =
            serde_json::from_str(r#"{"id":"abc","extra":true}"#).unwrap();
        assert_eq!(delivery.id.as_deref(), Some("abc"));
        assert!(delivery.status.is_none());
    }
}
