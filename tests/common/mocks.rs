use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use teamspace_api::{
    Error, Result,
    auth::{IdentityVerifier, Principal, SessionContext},
    invite::{InviteApi, InviteOutcome, Navigator, Toast},
    llm::LlmClient,
    notify::{MessageSink, NotificationEvent},
};

/// Mock identity verifier: any session with a token resolves to `principal`.
#[derive(Debug, Default)]
pub struct MockVerifier {
    pub principal: Option<Principal>,
    pub calls: Arc<Mutex<usize>>,
}

impl MockVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl IdentityVerifier for MockVerifier {
    async fn current_principal(&self, session: &SessionContext) -> Result<Principal> {
        *self.calls.lock().unwrap() += 1;

        if session.access_token.is_none() {
            return Err(Error::auth("Unauthorized"));
        }

        self.principal
            .clone()
            .ok_or_else(|| Error::auth("Unauthorized"))
    }
}

/// Mock generation provider.
///
/// Embeddings are derived from the input so positional correspondence can be
/// checked: `[len, first char code]`.
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub text_response: Option<String>,
    pub error: Option<String>,
    pub fail_on: Option<String>,
    pub delays: HashMap<String, u64>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub embedded: Arc<Mutex<Vec<String>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text_response = Some(text.to_string());
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn failing_on(mut self, text: &str) -> Self {
        self.fail_on = Some(text.to_string());
        self
    }

    pub fn with_delay(mut self, text: &str, millis: u64) -> Self {
        self.delays.insert(text.to_string(), millis);
        self
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len() + self.embedded.lock().unwrap().len()
    }

    pub fn embedding_for(text: &str) -> Vec<f32> {
        let first = text.chars().next().map(|c| c as u32 as f32).unwrap_or(0.0);
        vec![text.len() as f32, first]
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        self.text_response
            .clone()
            .ok_or_else(|| Error::llm("No mock text configured"))
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.embedded.lock().unwrap().push(text.to_string());

        if let Some(delay) = self.delays.get(text) {
            tokio::time::sleep(Duration::from_millis(*delay)).await;
        }

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }
        if self.fail_on.as_deref() == Some(text) {
            return Err(Error::llm(format!("cannot embed '{}'", text)));
        }

        Ok(Self::embedding_for(text))
    }
}

/// Records deliveries instead of posting them.
#[derive(Debug, Default)]
pub struct MockSink {
    pub events: Arc<Mutex<Vec<NotificationEvent>>>,
    pub error: Option<String>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delivery_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn delivered(&self) -> Vec<NotificationEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSink for MockSink {
    async fn deliver(&self, event: &NotificationEvent) -> Result<()> {
        if let Some(ref error) = self.error {
            return Err(Error::delivery(error.clone()));
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Mock accept-invite endpoint.
#[derive(Debug)]
pub struct MockInviteApi {
    pub outcome: Option<InviteOutcome>,
    pub tokens: Arc<Mutex<Vec<String>>>,
}

impl MockInviteApi {
    pub fn accepting(message: &str) -> Self {
        Self {
            outcome: Some(InviteOutcome {
                ok: true,
                message: Some(message.to_string()),
            }),
            tokens: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            outcome: Some(InviteOutcome {
                ok: false,
                message: Some(message.to_string()),
            }),
            tokens: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every call fails at the transport level.
    pub fn unreachable() -> Self {
        Self {
            outcome: None,
            tokens: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn submitted(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl InviteApi for MockInviteApi {
    async fn accept(&self, token: &str) -> Result<InviteOutcome> {
        self.tokens.lock().unwrap().push(token.to_string());
        self.outcome
            .clone()
            .ok_or_else(|| Error::internal("connection refused"))
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub toasts: Mutex<Vec<Toast>>,
    pub redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn toast(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }

    fn redirect(&self, route: &str) {
        self.redirects.lock().unwrap().push(route.to_string());
    }
}
