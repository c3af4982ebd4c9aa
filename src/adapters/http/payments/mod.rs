//! HTTP adapter for the payment submission API.
//!
//! - `POST /api/v1/payments` - accept a payment, 202 on success
//! - `GET /api/v1/payments/:id` - read a stored record (webhook URL excluded)
//! - `GET /health` - liveness

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, PaymentResponse, SubmitPaymentRequest, SubmitPaymentResponse};
pub use handlers::{ApiError, PaymentsAppState};
pub use routes::payments_router;
