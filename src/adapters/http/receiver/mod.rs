//! HTTP adapter for the webhook receiver.
//!
//! No user authentication; every delivery is verified against the shared
//! secret before any payload handling.
//!
//! - `POST /webhook` - signature-gated delivery endpoint
//! - `GET /health` - liveness

mod handlers;
mod routes;

pub use handlers::{GateError, ReceiverAppState, WebhookDelivery};
pub use routes::receiver_router;
