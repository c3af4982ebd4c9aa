//! Webhook signature scheme shared by the notifier and the receiver.
//!
//! Both sides compute an HMAC-SHA256 over the exact body bytes, keyed with a
//! shared secret, and carry the hex-encoded result in the
//! [`SIGNATURE_HEADER`] request header.

mod errors;
mod signer;

pub use errors::SignatureError;
pub use signer::WebhookSigner;

/// Header carrying the hex-encoded HMAC-SHA256 of the request body.
pub const SIGNATURE_HEADER: &str = "X-Webhook-Signature";
