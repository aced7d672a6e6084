use super::types::{Principal, SessionContext};
use crate::{Error, Result, config::SupabaseConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Resolves the session to its principal, or an `Error::Auth`.
    async fn current_principal(&self, session: &SessionContext) -> Result<Principal>;
}

/// Checks that `principal` is the same user the request claims to act for.
pub fn authorize(principal: &Principal, user_id: &str) -> Result<()> {
    if principal.id.is_empty() || principal.id != user_id {
        warn!(
            "Principal {} attempted to act as user {}",
            principal.id, user_id
        );
        return Err(Error::auth("Unauthorized"));
    }
    Ok(())
}

pub struct SupabaseVerifier {
    client: reqwest::Client,
    user_url: String,
    anon_key: String,
}

impl SupabaseVerifier {
    pub fn new(config: SupabaseConfig) -> Self {
        let user_url = format!("{}/auth/v1/user", config.url.trim_end_matches('/'));

        Self {
            client: reqwest::Client::new(),
            user_url,
            anon_key: config.anon_key,
        }
    }
}

#[async_trait]
impl IdentityVerifier for SupabaseVerifier {
    async fn current_principal(&self, session: &SessionContext) -> Result<Principal> {
        let token = session
            .access_token
            .as_deref()
            .ok_or_else(|| Error::auth("Unauthorized"))?;

        debug!("Resolving session against {}", self.user_url);

        let response = self
            .client
            .get(&self.user_url)
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                warn!("Identity provider unreachable: {}", e);
                Error::auth("Unauthorized")
            })?;

        match response.status() {
            StatusCode::OK => {}
            status => {
                warn!("Identity provider rejected session with status {}", status);
                return Err(Error::auth("Unauthorized"));
            }
        }

        let principal: Principal = response.json().await.map_err(|e| {
            warn!("Identity provider returned an unreadable user: {}", e);
            Error::auth("Unauthorized")
        })?;

        if principal.id.is_empty() {
            return Err(Error::auth("Unauthorized"));
        }

        Ok(principal)
    }
}
