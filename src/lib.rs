pub mod auth;
pub mod config;
pub mod error;
pub mod fanout;
pub mod invite;
pub mod llm;
pub mod notify;
pub mod server;

pub use error::{Error, Result};
