use super::{
    client::InviteApi,
    fsm::{InviteEvent, InviteState, InviteStateMachine},
};
use crate::Result;
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, warn};

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";

const DEFAULT_SUCCESS_MESSAGE: &str = "Invitation accepted";
const DEFAULT_FAILURE_MESSAGE: &str = "Failed to accept invitation";
const NETWORK_FAILURE_MESSAGE: &str = "Something went wrong while accepting the invitation";

#[derive(Debug, Clone, PartialEq)]
pub enum Toast {
    Success(String),
    Error(String),
}

/// User-facing effects of the invitation flow.
pub trait Navigator: Send + Sync {
    fn toast(&self, toast: Toast);

    fn redirect(&self, route: &str);
}

/// Reads the `token` query parameter from a navigation URL.
pub fn token_from_url(url: &str) -> Option<String> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Unparseable navigation URL {}: {}", url, e);
            return None;
        }
    };

    parsed
        .query_pairs()
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}

/// Drives the invitation flow once per distinct token value.
pub struct InviteAcceptor {
    api: Arc<dyn InviteApi>,
    navigator: Arc<dyn Navigator>,
    machine: InviteStateMachine,
    // Outer `None` means never activated; inner `None` means activated without a token.
    handled_token: Option<Option<String>>,
}

impl InviteAcceptor {
    pub fn new(api: Arc<dyn InviteApi>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            navigator,
            machine: InviteStateMachine::new(),
            handled_token: None,
        }
    }

    pub fn state(&self) -> &InviteState {
        self.machine.current_state()
    }

    pub async fn activate_from_url(&mut self, url: &str) -> Result<&InviteState> {
        self.activate(token_from_url(url)).await
    }

    pub async fn activate(&mut self, token: Option<String>) -> Result<&InviteState> {
        let token = token.filter(|t| !t.is_empty());

        if self.machine.is_terminal() && self.handled_token.as_ref() == Some(&token) {
            debug!("Invitation token already handled, ignoring activation");
            return Ok(self.machine.current_state());
        }
        self.handled_token = Some(token.clone());
        self.machine.reset();

        let Some(token) = token else {
            self.machine.transition(InviteEvent::TokenMissing)?;
            self.navigator.redirect(HOME_ROUTE);
            return Ok(self.machine.current_state());
        };

        self.machine.transition(InviteEvent::TokenFound)?;

        match self.api.accept(&token).await {
            Ok(outcome) if outcome.ok => {
                self.machine.transition(InviteEvent::AcceptSucceeded)?;
                let message = outcome
                    .message
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
                self.navigator.toast(Toast::Success(message));
                self.navigator.redirect(LOGIN_ROUTE);
            }
            Ok(outcome) => {
                self.machine.transition(InviteEvent::AcceptFailed)?;
                let message = outcome
                    .message
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                self.navigator.toast(Toast::Error(message));
                self.navigator.redirect(HOME_ROUTE);
            }
            Err(e) => {
                warn!("Invitation request failed: {}", e);
                self.machine.transition(InviteEvent::AcceptFailed)?;
                self.navigator
                    .toast(Toast::Error(NETWORK_FAILURE_MESSAGE.to_string()));
                self.navigator.redirect(HOME_ROUTE);
            }
        }

        Ok(self.machine.current_state())
    }
}
