//! Ports - trait contracts the application layer depends on.
//!
//! Adapters implement these; the lifecycle engine only ever sees the traits.

mod payment_store;
mod webhook_notifier;

pub use payment_store::PaymentStore;
pub use webhook_notifier::{DeliveryError, WebhookNotifier};
