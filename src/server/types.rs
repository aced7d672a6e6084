use crate::notify::NotifyOutcome;
use serde::Serialize;

/// `{"ok": true}` or `{"ok": true, "skipped": true}`.
#[derive(Debug, Clone, Serialize)]
pub struct NotifyResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
}

impl From<NotifyOutcome> for NotifyResponse {
    fn from(outcome: NotifyOutcome) -> Self {
        Self {
            ok: true,
            skipped: outcome.skipped,
        }
    }
}
