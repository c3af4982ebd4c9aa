//! HTTP webhook notifier.
//!
//! Serializes the payment record to canonical JSON (webhook URL excluded),
//! signs the exact body bytes, and POSTs them to the record's webhook URL.
//! The request timeout is mandatory; the advancement task must never block
//! indefinitely behind a delivery.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::domain::payment::Payment;
use crate::domain::signature::{WebhookSigner, SIGNATURE_HEADER};
use crate::ports::{DeliveryError, WebhookNotifier};

/// Best-effort signed webhook delivery over HTTP.
pub struct HttpWebhookNotifier {
    client: reqwest::Client,
    signer: Option<WebhookSigner>,
}

impl HttpWebhookNotifier {
    /// Builds the notifier with a bounded per-request timeout.
    ///
    /// `signer` is `None` when no secret is configured; deliveries then
    /// fail with [`DeliveryError::MissingSecret`] instead of going out
    /// unauthenticated.
    pub fn new(signer: Option<WebhookSigner>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, signer })
    }
}

#[async_trait]
impl WebhookNotifier for HttpWebhookNotifier {
    async fn notify(&self, payment: &Payment) -> Result<(), DeliveryError> {
        let signer = self.signer.as_ref().ok_or(DeliveryError::MissingSecret)?;

        let body = serde_json::to_vec(payment).map_err(|e| DeliveryError::Payload(e.to_string()))?;
        let signature = signer.sign(&body);

        let response = self
            .client
            .post(&payment.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, signature)
            .body(body)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::UnexpectedStatus(status.as_u16()));
        }

        tracing::debug!(payment_id = %payment.id, status = status.as_u16(), "webhook accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;

    use crate::domain::payment::{PaymentId, PaymentRequest};

    const TEST_SECRET: &str = "notifier_test_secret";

    #[derive(Clone)]
    struct Captured {
        deliveries: Arc<Mutex<Vec<(Option<String>, Vec<u8>)>>>,
        respond_with: StatusCode,
    }

    impl Captured {
        fn responding(respond_with: StatusCode) -> Self {
            Self {
                deliveries: Arc::new(Mutex::new(Vec::new())),
                respond_with,
            }
        }
    }

    async fn capture_hook(
        State(captured): State<Captured>,
        headers: HeaderMap,
        body: axum::body::Bytes,
    ) -> StatusCode {
        let signature = headers
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        captured
            .deliveries
            .lock()
            .unwrap()
            .push((signature, body.to_vec()));
        captured.respond_with
    }

    /// Serves a capture endpoint on an ephemeral port, returning its URL.
    async fn spawn_hook(captured: Captured) -> String {
        let app = Router::new()
            .route("/hook", post(capture_hook))
            .with_state(captured);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/hook")
    }

    fn payment_for(url: &str) -> Payment {
        let request = PaymentRequest::new(100.0, "USD", url).unwrap();
        Payment::from_request(PaymentId::new(), request)
    }

    fn notifier_with_secret() -> HttpWebhookNotifier {
        let signer = WebhookSigner::from_secret(TEST_SECRET).unwrap();
        HttpWebhookNotifier::new(Some(signer), Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn delivers_signed_payload_without_webhook_url() {
        let captured = Captured::responding(StatusCode::OK);
        let url = spawn_hook(captured.clone()).await;
        let payment = payment_for(&url);

        notifier_with_secret().notify(&payment).await.unwrap();

        let deliveries = captured.deliveries.lock().unwrap();
        assert_eq!(deliveries.len(), 1);
        let (signature, body) = &deliveries[0];

        // The signature covers the exact body bytes.
        let verifier = WebhookSigner::from_secret(TEST_SECRET).unwrap();
        verifier.verify(body, signature.as_deref().unwrap()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json["id"], payment.id.as_str());
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["amount"], 100.0);
        assert_eq!(json["currency"], "USD");
        assert!(json.get("webhookUrl").is_none());
    }

    #[tokio::test]
    async fn non_2xx_response_is_a_delivery_error() {
        let captured = Captured::responding(StatusCode::INTERNAL_SERVER_ERROR);
        let url = spawn_hook(captured).await;
        let payment = payment_for(&url);

        let err = notifier_with_secret().notify(&payment).await.unwrap_err();

        assert_eq!(err, DeliveryError::UnexpectedStatus(500));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // Port 9 (discard) is assumed closed.
        let payment = payment_for("http://127.0.0.1:9/hook");

        let err = notifier_with_secret().notify(&payment).await.unwrap_err();

        assert!(matches!(err, DeliveryError::Transport(_)));
    }

    #[tokio::test]
    async fn missing_secret_blocks_delivery() {
        let captured = Captured::responding(StatusCode::OK);
        let url = spawn_hook(captured.clone()).await;
        let payment = payment_for(&url);

        let notifier = HttpWebhookNotifier::new(None, Duration::from_secs(2)).unwrap();
        let err = notifier.notify(&payment).await.unwrap_err();

        assert_eq!(err, DeliveryError::MissingSecret);
        assert!(captured.deliveries.lock().unwrap().is_empty());
    }
}
