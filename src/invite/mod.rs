mod acceptor;
mod client;
pub mod fsm;

pub use acceptor::{HOME_ROUTE, InviteAcceptor, LOGIN_ROUTE, Navigator, Toast, token_from_url};
pub use client::{HttpInviteApi, InviteApi, InviteOutcome};
pub use fsm::{InviteEvent, InviteState, InviteStateMachine};
