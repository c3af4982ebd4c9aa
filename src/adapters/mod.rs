//! Adapters - implementations of port interfaces and the HTTP surface.
//!
//! - `memory` - in-process payment store
//! - `notifier` - HTTP webhook delivery
//! - `http` - axum routers for the submission API and the receiver gate

pub mod http;
pub mod memory;
pub mod notifier;
