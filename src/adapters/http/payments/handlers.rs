//! HTTP handlers for the payment submission API.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{ProcessPaymentCommand, ProcessPaymentHandler};
use crate::domain::payment::{PaymentError, PaymentId};
use crate::ports::PaymentStore;

use super::dto::{ErrorResponse, PaymentResponse, SubmitPaymentRequest, SubmitPaymentResponse};

/// Shared state for the submission API. Cloned per request; dependencies
/// are Arc-wrapped.
#[derive(Clone)]
pub struct PaymentsAppState {
    pub process_payment: Arc<ProcessPaymentHandler>,
    pub store: Arc<dyn PaymentStore>,
}

/// POST /api/v1/payments - accept a payment submission.
///
/// Returns 202 immediately; the lifecycle continues in the background and
/// the outcome is delivered to the submission's webhook URL.
pub async fn submit_payment(
    State(state): State<PaymentsAppState>,
    Json(request): Json<SubmitPaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = ProcessPaymentCommand {
        amount: request.amount.unwrap_or_default(),
        currency: request.currency.unwrap_or_default(),
        webhook_url: request.webhook_url.unwrap_or_default(),
    };

    state.process_payment.handle(cmd).await?;

    Ok((StatusCode::ACCEPTED, Json(SubmitPaymentResponse::accepted())))
}

/// GET /api/v1/payments/:id - read a stored record.
pub async fn get_payment(
    State(state): State<PaymentsAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = PaymentId::from(id.as_str());
    let payment = state
        .store
        .get(&id)
        .await
        .map_err(PaymentError::from)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(PaymentResponse { payment }))
}

/// GET /health - liveness probe.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// API error type converting domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Payment(PaymentError),
    NotFound,
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        Self::Payment(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match &self {
            ApiError::Payment(err @ PaymentError::InvalidRequest(_)) => {
                tracing::warn!(error = %err, "rejecting payment submission");
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", err.to_string())
            }
            ApiError::Payment(err @ PaymentError::Store(_)) => {
                tracing::error!(error = %err, "payment store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                "PAYMENT_NOT_FOUND",
                "No payment with that id".to_string(),
            ),
        };

        let body = ErrorResponse::new(code, message);
        (status, Json(body)).into_response()
    }
}
