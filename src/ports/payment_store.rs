//! Payment store port.
//!
//! Keyed storage of payment records, safe under unbounded concurrent
//! callers. The store exclusively owns the authoritative copy of each
//! record; every mutation routes through it so concurrent readers observe
//! a consistent status.

use async_trait::async_trait;

use crate::domain::payment::{Payment, PaymentId, PaymentStatus, StoreError};

/// Concurrency-safe keyed storage of payment records.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Inserts a new record keyed by its identity.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateId`] if the identity already exists. Not
    /// expected with generated UUIDs, but checked rather than assumed.
    async fn create(&self, payment: Payment) -> Result<(), StoreError>;

    /// Updates the stored record's status in place.
    ///
    /// A missing identity is a silent no-op: the caller holding a stale id
    /// is a bug elsewhere, and the store must not escalate it. Implementors
    /// must also refuse transitions the lifecycle does not permit.
    async fn update_status(&self, id: &PaymentId, status: PaymentStatus)
        -> Result<(), StoreError>;

    /// Returns the record, or `None` when the identity is unknown.
    async fn get(&self, id: &PaymentId) -> Result<Option<Payment>, StoreError>;
}
