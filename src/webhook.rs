//! Webhook delivery client.
//!
//! Exactly one POST per run; a non-success response or a transport failure
//! is surfaced as [`DeliveryError`] for the caller to turn into a run
//! failure. No retry.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::model::NotificationPayload;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid webhook URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("webhook responded {status}: {body}")]
    Http { status: StatusCode, body: String },
    #[error("failed to reach webhook: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Seam between the orchestrator and the HTTP client, so tests can record
/// deliveries instead of talking to the network.
#[async_trait]
pub trait WebhookService: Send + Sync {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<String, DeliveryError>;
}

#[derive(Clone)]
pub struct WebhookClient {
    http: Client,
    endpoint: Url,
}

impl fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl WebhookClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, DeliveryError> {
        let endpoint = Url::parse(url).map_err(|err| DeliveryError::InvalidUrl {
            url: url.to_string(),
            reason: err.to_string(),
        })?;
        let http = Client::builder()
            .user_agent("ci-herald/0.1")
            .timeout(timeout)
            .build()
            .expect("reqwest client");
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn build_request(&self, payload: &NotificationPayload) -> Result<reqwest::Request, DeliveryError> {
        self.http
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(payload)
            .build()
            .map_err(DeliveryError::Transport)
    }
}

#[async_trait]
impl WebhookService for WebhookClient {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<String, DeliveryError> {
        let request = self.build_request(payload)?;
        info!(url = %request.url(), "posting notification");

        let res = self.http.execute(request).await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!(%status, %body, "webhook rejected notification");
            return Err(DeliveryError::Http { status, body });
        }

        let body = res.text().await?;
        info!(%status, "notification accepted");
        Ok(body)
    }
}
