//! Payment lifecycle status state machine.
//!
//! A payment starts `Pending` and moves forward exactly once to one of the
//! terminal statuses. There is no path back to `Pending` and no transition
//! out of a terminal status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a payment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Accepted and stored; background processing has not finished.
    Pending,

    /// Processing completed successfully. Terminal.
    Processed,

    /// Processing completed unsuccessfully. Terminal.
    Failed,
}

impl PaymentStatus {
    /// Returns true once no further transition is allowed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Processed | PaymentStatus::Failed)
    }

    /// Whether the lifecycle permits moving from `self` to `target`.
    pub fn can_transition_to(&self, target: &Self) -> bool {
        use PaymentStatus::*;
        matches!((self, target), (Pending, Processed) | (Pending, Failed))
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Processed => "PROCESSED",
            PaymentStatus::Failed => "FAILED",
        };
        write!(f, "{}", s)
    }
}
