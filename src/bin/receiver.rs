//! payflow-receiver - signature-verifying webhook consumer.
//!
//! Stands in for the external party receiving payment outcome callbacks.
//! Every delivery is verified against the shared secret before any payload
//! handling; an unconfigured secret makes every delivery fail loudly rather
//! than be accepted unauthenticated.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use payflow::adapters::http::receiver::{receiver_router, ReceiverAppState};
use payflow::config::AppConfig;
use payflow::domain::signature::WebhookSigner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let signer = match config.webhook.signing_secret() {
        Some(secret) => Some(Arc::new(WebhookSigner::new(secret.clone())?)),
        None => {
            tracing::error!(
                "PAYFLOW__WEBHOOK__SECRET is not set; all deliveries will be rejected"
            );
            None
        }
    };

    let state = ReceiverAppState { signer };
    let app = receiver_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.receiver.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "webhook receiver listening");
    axum::serve(listener, app).await?;

    Ok(())
}
