use super::slack::{MessageSink, NotificationEvent};
use crate::{
    Error, Result,
    auth::{IdentityVerifier, Principal, SessionContext},
};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info};

const UNKNOWN_EMAIL: &str = "unknown email";

/// Result of one notifier invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyOutcome {
    pub skipped: bool,
}

pub struct SignupNotifier {
    verifier: Arc<dyn IdentityVerifier>,
    sink: Arc<dyn MessageSink>,
    webhook_url: Option<String>,
    window: Duration,
}

impl SignupNotifier {
    pub fn new(
        verifier: Arc<dyn IdentityVerifier>,
        sink: Arc<dyn MessageSink>,
        webhook_url: Option<String>,
        window: Duration,
    ) -> Self {
        Self {
            verifier,
            sink,
            webhook_url,
            window,
        }
    }

    pub async fn notify(&self, session: &SessionContext) -> Result<NotifyOutcome> {
        self.notify_at(session, Utc::now()).await
    }

    /// Same as [`notify`](Self::notify) with an explicit clock reading.
    pub async fn notify_at(
        &self,
        session: &SessionContext,
        now: DateTime<Utc>,
    ) -> Result<NotifyOutcome> {
        let target_url = self
            .webhook_url
            .clone()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::config("Slack webhook URL is not configured"))?;

        let principal = self.verifier.current_principal(session).await?;

        if !self.is_recent(&principal, now) {
            debug!(
                "Skipping signup notification for {}: account is not new",
                principal.id
            );
            return Ok(NotifyOutcome { skipped: true });
        }

        let email = principal
            .email
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or(UNKNOWN_EMAIL);
        let event = NotificationEvent {
            message: format!("New user signed up: {}", email),
            target_url,
        };

        self.sink.deliver(&event).await?;
        info!("Sent signup notification for {}", principal.id);

        Ok(NotifyOutcome { skipped: false })
    }

    fn is_recent(&self, principal: &Principal, now: DateTime<Utc>) -> bool {
        match principal.created_at {
            Some(created_at) => now - created_at <= self.window,
            None => false,
        }
    }
}
