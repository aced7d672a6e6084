use crate::{Result, config::InviteConfig};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Server verdict on an acceptance attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct InviteOutcome {
    pub ok: bool,
    pub message: Option<String>,
}

#[async_trait]
pub trait InviteApi: Send + Sync {
    async fn accept(&self, token: &str) -> Result<InviteOutcome>;
}

#[derive(Debug, Deserialize)]
struct InviteResponseBody {
    #[serde(default)]
    message: Option<String>,
}

pub struct HttpInviteApi {
    client: reqwest::Client,
    accept_url: String,
}

impl HttpInviteApi {
    pub fn new(config: InviteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            accept_url: config.accept_url,
        }
    }
}

#[async_trait]
impl InviteApi for HttpInviteApi {
    async fn accept(&self, token: &str) -> Result<InviteOutcome> {
        debug!("Submitting invitation token to {}", self.accept_url);

        let response = self
            .client
            .post(&self.accept_url)
            .json(&json!({ "token": token }))
            .send()
            .await?;

        let ok = response.status().is_success();
        // The body is informational; an unreadable one still carries the status verdict.
        let message = response
            .json::<InviteResponseBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        Ok(InviteOutcome { ok, message })
    }
}
