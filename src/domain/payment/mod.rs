//! Payment domain module.
//!
//! # Module Structure
//!
//! - `entity` - PaymentRequest input, Payment record, PaymentId identity
//! - `status` - PaymentStatus lifecycle state machine
//! - `errors` - validation, store, and lifecycle error taxonomy

mod entity;
mod errors;
mod status;

pub use entity::{Payment, PaymentId, PaymentRequest};
pub use errors::{PaymentError, PaymentRequestError, StoreError};
pub use status::PaymentStatus;
