//! In-memory adapter implementations.

mod payment_store;

pub use payment_store::InMemoryPaymentStore;
