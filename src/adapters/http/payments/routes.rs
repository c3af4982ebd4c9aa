//! Axum router for the payment submission API.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_payment, health, submit_payment, PaymentsAppState};

/// Create the payments API router.
///
/// # Routes
/// - `POST /api/v1/payments` - accept a payment submission (202)
/// - `GET /api/v1/payments/:id` - read a stored record
/// - `GET /health` - liveness
///
/// Non-POST methods on the submission route answer 405 via axum's method
/// routing.
pub fn payments_router() -> Router<PaymentsAppState> {
    Router::new()
        .route("/api/v1/payments", post(submit_payment))
        .route("/api/v1/payments/:id", get(get_payment))
        .route("/health", get(health))
}
