use crate::{Error, Result};
use tracing::{debug, info, warn};

// Invitation states
#[derive(Debug, Clone, PartialEq)]
pub enum InviteState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
    NoToken,
}

// Invitation events
#[derive(Debug, Clone, PartialEq)]
pub enum InviteEvent {
    TokenMissing,
    TokenFound,
    AcceptSucceeded,
    AcceptFailed,
}

pub struct InviteStateMachine {
    state: InviteState,
}

impl InviteStateMachine {
    pub fn new() -> Self {
        Self {
            state: InviteState::Idle,
        }
    }

    pub fn current_state(&self) -> &InviteState {
        &self.state
    }

    pub fn transition(&mut self, event: InviteEvent) -> Result<()> {
        let new_state = match (&self.state, &event) {
            (InviteState::Idle, InviteEvent::TokenMissing) => InviteState::NoToken,
            (InviteState::Idle, InviteEvent::TokenFound) => InviteState::Submitting,
            (InviteState::Submitting, InviteEvent::AcceptSucceeded) => InviteState::Succeeded,
            (InviteState::Submitting, InviteEvent::AcceptFailed) => InviteState::Failed,
            _ => {
                warn!(
                    "❌ Invalid invite transition from {:?} with event {:?}",
                    self.state, event
                );
                return Err(Error::fsm(format!(
                    "Invalid transition from {:?} with event {:?}",
                    self.state, event
                )));
            }
        };

        info!(
            "🎯 Invite state transition: {:?} -> {:?} (event: {:?})",
            self.state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            InviteState::Succeeded | InviteState::Failed | InviteState::NoToken
        )
    }

    pub fn reset(&mut self) {
        debug!("🔄 Resetting invite state machine from {:?}", self.state);
        self.state = InviteState::Idle;
    }
}

impl Default for InviteStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
