//! Outbound webhook delivery adapter.

mod http_notifier;

pub use http_notifier::HttpWebhookNotifier;
