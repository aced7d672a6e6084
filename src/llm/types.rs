use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which generation endpoint a request arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Text,
    Embeddings,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationRequest {
    Text { prompt: String },
    Embeddings { texts: Vec<String> },
}

/// Serializes as `{"text": ...}` or `{"embeddings": [[...], ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationResult {
    Text(String),
    Embeddings(Vec<Vec<f32>>),
}

/// A parsed request body together with the user it claims to act for.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub user_id: String,
    pub request: GenerationRequest,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerationBody {
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    texts: Option<Vec<String>>,
    #[serde(default)]
    user_id: Option<String>,
}

impl ValidatedRequest {
    /// Parses a raw JSON body for `mode`. Every failure is an `Error::Validation`.
    pub fn parse(mode: GenerationMode, raw: &[u8]) -> Result<Self> {
        let body: GenerationBody = serde_json::from_slice(raw)
            .map_err(|e| Error::validation(format!("Invalid request body: {}", e)))?;

        let request = match mode {
            GenerationMode::Text => {
                let prompt = body
                    .prompt
                    .filter(|p| !p.trim().is_empty())
                    .ok_or_else(|| Error::validation("Prompt is required"))?;
                GenerationRequest::Text { prompt }
            }
            GenerationMode::Embeddings => {
                let texts = body
                    .texts
                    .filter(|t| !t.is_empty())
                    .ok_or_else(|| Error::validation("Texts must be a non-empty array"))?;
                if texts.iter().any(|t| t.trim().is_empty()) {
                    return Err(Error::validation("Texts must not contain empty strings"));
                }
                GenerationRequest::Embeddings { texts }
            }
        };

        let user_id = body
            .user_id
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::validation("User ID is required"))?;

        Ok(Self { user_id, request })
    }
}
