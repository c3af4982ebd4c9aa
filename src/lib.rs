//! Payflow - Webhook-Based Payment Notification Service
//!
//! Accepts payment requests, advances them through a processing lifecycle in
//! the background, and notifies an external endpoint of the outcome via an
//! HMAC-SHA256 signed webhook callback.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
