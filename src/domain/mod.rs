//! Domain layer - core business types with no adapter dependencies.

pub mod payment;
pub mod signature;
