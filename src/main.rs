//! payflow-server - the payment processing service.
//!
//! Accepts payment submissions, advances them in the background, and
//! delivers signed webhook notifications. Only startup failures (bad
//! configuration, unbindable port) are fatal.

use std::sync::Arc;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use payflow::adapters::http::payments::{payments_router, PaymentsAppState};
use payflow::adapters::memory::InMemoryPaymentStore;
use payflow::adapters::notifier::HttpWebhookNotifier;
use payflow::application::ProcessPaymentHandler;
use payflow::config::AppConfig;
use payflow::domain::signature::WebhookSigner;
use payflow::ports::{PaymentStore, WebhookNotifier};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let signer = match config.webhook.signing_secret() {
        Some(secret) => Some(WebhookSigner::new(secret.clone())?),
        None => {
            tracing::warn!(
                "PAYFLOW__WEBHOOK__SECRET is not set; webhook deliveries will be refused"
            );
            None
        }
    };

    let store: Arc<dyn PaymentStore> = Arc::new(InMemoryPaymentStore::new());
    let notifier: Arc<dyn WebhookNotifier> = Arc::new(HttpWebhookNotifier::new(
        signer,
        config.webhook.delivery_timeout(),
    )?);
    let process_payment = Arc::new(ProcessPaymentHandler::new(
        Arc::clone(&store),
        notifier,
        config.webhook.processing_delay(),
    ));

    let state = PaymentsAppState {
        process_payment,
        store,
    };
    let app = payments_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "payment server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
