//! Application layer - orchestration of the payment lifecycle.

mod process_payment;

pub use process_payment::{
    ProcessPaymentCommand, ProcessPaymentHandler, ProcessPaymentResult,
};
