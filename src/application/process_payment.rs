//! ProcessPaymentHandler - the payment lifecycle engine.
//!
//! Validates a submission, stores the record as `Pending`, and schedules a
//! detached advancement task that settles the payment, routes the terminal
//! status through the store, and hands the record to the webhook notifier.
//! The submitting caller never waits on the advancement task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::domain::payment::{
    Payment, PaymentError, PaymentId, PaymentRequest, PaymentStatus,
};
use crate::ports::{PaymentStore, WebhookNotifier};

/// Command to accept a payment submission.
///
/// Fields arrive as decoded by the HTTP layer; missing inputs surface here
/// as their empty forms and fail validation.
#[derive(Debug, Clone)]
pub struct ProcessPaymentCommand {
    pub amount: f64,
    pub currency: String,
    pub webhook_url: String,
}

/// Result of accepting a submission. The record is `Pending` in the store
/// by the time this is returned.
#[derive(Debug, Clone)]
pub struct ProcessPaymentResult {
    pub payment_id: PaymentId,
}

/// Orchestrates the PENDING -> terminal lifecycle of payments.
pub struct ProcessPaymentHandler {
    store: Arc<dyn PaymentStore>,
    notifier: Arc<dyn WebhookNotifier>,
    processing_delay: Duration,
    completion: Option<mpsc::UnboundedSender<PaymentId>>,
}

impl ProcessPaymentHandler {
    pub fn new(
        store: Arc<dyn PaymentStore>,
        notifier: Arc<dyn WebhookNotifier>,
        processing_delay: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            processing_delay,
            completion: None,
        }
    }

    /// Attaches a channel that receives each payment id once its
    /// advancement task has finished. No production consumer exists; tests
    /// use it to await background completion without polling.
    pub fn with_completion_signal(mut self, tx: mpsc::UnboundedSender<PaymentId>) -> Self {
        self.completion = Some(tx);
        self
    }

    /// Accepts a payment submission.
    ///
    /// Validates, stores the `Pending` record, schedules advancement, and
    /// returns immediately. A store failure propagates and no background
    /// task is started.
    pub async fn handle(
        &self,
        cmd: ProcessPaymentCommand,
    ) -> Result<ProcessPaymentResult, PaymentError> {
        let request = PaymentRequest::new(cmd.amount, cmd.currency, cmd.webhook_url)?;

        let id = PaymentId::new();
        let payment = Payment::from_request(id.clone(), request);
        self.store.create(payment).await?;

        tracing::info!(payment_id = %id, "payment accepted, scheduling processing");

        let store = Arc::clone(&self.store);
        let notifier = Arc::clone(&self.notifier);
        let delay = self.processing_delay;
        let completion = self.completion.clone();
        let task_id = id.clone();
        tokio::spawn(async move {
            Self::advance(store, notifier, task_id, delay, completion).await;
        });

        Ok(ProcessPaymentResult { payment_id: id })
    }

    /// Advancement task: runs once per payment with no caller waiting on
    /// it. Failures are logged with the payment id and stage; nothing here
    /// may panic or surface to the original caller.
    async fn advance(
        store: Arc<dyn PaymentStore>,
        notifier: Arc<dyn WebhookNotifier>,
        id: PaymentId,
        delay: Duration,
        completion: Option<mpsc::UnboundedSender<PaymentId>>,
    ) {
        tracing::info!(payment_id = %id, "processing payment");
        tokio::time::sleep(delay).await;

        let outcome = Self::settle();
        tracing::info!(payment_id = %id, status = %outcome, "payment settled");

        match store.update_status(&id, outcome).await {
            Ok(()) => Self::deliver(&store, notifier.as_ref(), &id).await,
            Err(err) => {
                tracing::error!(payment_id = %id, stage = "update_status", error = %err,
                    "failed to record terminal status, skipping notification");
            }
        }

        if let Some(tx) = completion {
            let _ = tx.send(id);
        }
    }

    /// Determines the terminal status. Stands in for a payment-gateway
    /// interaction; a real integration returns `Failed` on decline through
    /// this same exit.
    fn settle() -> PaymentStatus {
        PaymentStatus::Processed
    }

    async fn deliver(store: &Arc<dyn PaymentStore>, notifier: &dyn WebhookNotifier, id: &PaymentId) {
        // Re-read so the notifier sees the authoritative stored record.
        let payment = match store.get(id).await {
            Ok(Some(payment)) => payment,
            Ok(None) => {
                tracing::warn!(payment_id = %id, stage = "notify",
                    "record vanished before notification");
                return;
            }
            Err(err) => {
                tracing::error!(payment_id = %id, stage = "notify", error = %err,
                    "failed to load record for notification");
                return;
            }
        };

        match notifier.notify(&payment).await {
            Ok(()) => {
                tracing::info!(payment_id = %id, "webhook delivered");
            }
            Err(err) => {
                // Fire-and-forget: delivery failures are logged and dropped.
                tracing::error!(payment_id = %id, stage = "notify", error = %err,
                    "webhook delivery failed");
            }
        }
    }
}
