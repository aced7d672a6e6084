use axum::http::{HeaderMap, header};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SESSION_COOKIE: &str = "sb-access-token";

/// The authenticated identity behind a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Session state carried by an inbound request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    pub access_token: Option<String>,
}

impl SessionContext {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Bearer header first, then the Supabase session cookie.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let bearer = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let access_token = bearer.or_else(|| {
            headers
                .get_all(header::COOKIE)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .flat_map(|v| v.split(';'))
                .filter_map(|pair| pair.trim().split_once('='))
                .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
                .map(|(_, value)| value.to_string())
        });

        Self { access_token }
    }
}
