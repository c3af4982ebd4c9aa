//! HTTP adapters.
//!
//! - `payments` - submission API served by `payflow-server`
//! - `receiver` - signature-gated webhook consumer served by `payflow-receiver`

pub mod payments;
pub mod receiver;
