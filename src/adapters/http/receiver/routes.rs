//! Axum router for the webhook receiver.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, receive_webhook, ReceiverAppState};

/// Create the receiver router.
///
/// # Routes
/// - `POST /webhook` - signature-gated delivery endpoint
/// - `GET /health` - liveness
pub fn receiver_router() -> Router<ReceiverAppState> {
    Router::new()
        .route("/webhook", post(receive_webhook))
        .route("/health", get(health))
}
