use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

/// A message bound for an external endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEvent {
    pub message: String,
    pub target_url: String,
}

#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Delivers once. A non-success response from the endpoint is an `Error::Delivery`.
    async fn deliver(&self, event: &NotificationEvent) -> Result<()>;
}

/// Slack incoming webhook.
pub struct SlackWebhook {
    client: reqwest::Client,
}

impl SlackWebhook {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for SlackWebhook {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageSink for SlackWebhook {
    async fn deliver(&self, event: &NotificationEvent) -> Result<()> {
        debug!("Posting notification to Slack webhook");

        let response = self
            .client
            .post(&event.target_url)
            .json(&json!({ "text": event.message }))
            .send()
            .await
            // The webhook URL is the credential; keep it out of the error text.
            .map_err(|e| {
                Error::internal(format!("Slack webhook request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Slack webhook responded with {}: {}", status, body);
            return Err(Error::delivery(format!(
                "Slack webhook responded with {}",
                status
            )));
        }

        Ok(())
    }
}
