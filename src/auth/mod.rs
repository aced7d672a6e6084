mod client;
mod types;

pub use client::{IdentityVerifier, SupabaseVerifier, authorize};
pub use types::{Principal, SessionContext};
