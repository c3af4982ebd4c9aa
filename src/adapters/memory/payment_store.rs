//! In-memory payment store.
//!
//! A single `RwLock<HashMap>` guards the mapping: any number of concurrent
//! readers, writers exclusive with readers and each other. The lock is held
//! only around the map operation itself, never across an await point, so
//! unrelated HTTP deliveries are never serialized behind it.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::payment::{Payment, PaymentId, PaymentStatus, StoreError};
use crate::ports::PaymentStore;

/// Process-local payment store. State does not survive a restart.
#[derive(Default)]
pub struct InMemoryPaymentStore {
    payments: RwLock<HashMap<PaymentId, Payment>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.payments.read().expect("payment map lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn create(&self, payment: Payment) -> Result<(), StoreError> {
        let mut payments = self.payments.write().expect("payment map lock poisoned");
        if payments.contains_key(&payment.id) {
            return Err(StoreError::DuplicateId(payment.id));
        }
        payments.insert(payment.id.clone(), payment);
        Ok(())
    }

    async fn update_status(
        &self,
        id: &PaymentId,
        status: PaymentStatus,
    ) -> Result<(), StoreError> {
        let mut payments = self.payments.write().expect("payment map lock poisoned");
        match payments.get_mut(id) {
            Some(payment) if payment.status.can_transition_to(&status) => {
                payment.status = status;
            }
            Some(payment) => {
                tracing::warn!(payment_id = %id, from = %payment.status, to = %status,
                    "refusing lifecycle-violating status update");
            }
            None => {
                // Missing key is not fatal here; the absent record is a bug
                // at the call site, not in the store.
                tracing::warn!(payment_id = %id, "status update for unknown payment ignored");
            }
        }
        Ok(())
    }

    async fn get(&self, id: &PaymentId) -> Result<Option<Payment>, StoreError> {
        let payments = self.payments.read().expect("payment map lock poisoned");
        Ok(payments.get(id).cloned())
    }
}
