use super::gather::gather;
use crate::{
    Error, Result,
    auth::{IdentityVerifier, SessionContext, authorize},
    llm::{GenerationMode, GenerationRequest, GenerationResult, LlmClient, ValidatedRequest},
};
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

/// Validate, authenticate, authorize, then call the provider once per input unit.
pub struct FanOutHandler {
    verifier: Arc<dyn IdentityVerifier>,
    llm: Arc<dyn LlmClient>,
}

impl FanOutHandler {
    pub fn new(verifier: Arc<dyn IdentityVerifier>, llm: Arc<dyn LlmClient>) -> Self {
        Self { verifier, llm }
    }

    pub async fn handle(
        &self,
        mode: GenerationMode,
        raw_body: &[u8],
        session: &SessionContext,
    ) -> Result<GenerationResult> {
        let span = info_span!("generation", request_id = %Uuid::new_v4(), mode = ?mode);
        self.handle_inner(mode, raw_body, session)
            .instrument(span)
            .await
    }

    async fn handle_inner(
        &self,
        mode: GenerationMode,
        raw_body: &[u8],
        session: &SessionContext,
    ) -> Result<GenerationResult> {
        let validated = ValidatedRequest::parse(mode, raw_body).inspect_err(|e| {
            debug!("Rejected generation request: {}", e);
        })?;

        let principal = self.verifier.current_principal(session).await?;
        authorize(&principal, &validated.user_id)?;

        match validated.request {
            GenerationRequest::Text { prompt } => {
                let text = self
                    .llm
                    .generate_text(&prompt)
                    .await
                    .map_err(|e| provider_failure("Failed to generate text", e))?;
                info!("Generated {} chars for user {}", text.len(), principal.id);
                Ok(GenerationResult::Text(text))
            }
            GenerationRequest::Embeddings { texts } => {
                let embeddings = gather(texts.iter(), |text| self.llm.embed(text))
                    .await
                    .map_err(|e| provider_failure("Failed to generate embeddings", e))?;
                info!(
                    "Generated {} embeddings for user {}",
                    embeddings.len(),
                    principal.id
                );
                Ok(GenerationResult::Embeddings(embeddings))
            }
        }
    }
}

fn provider_failure(context: &str, err: Error) -> Error {
    warn!("{}: {}", context, err);
    match err {
        Error::Llm(msg) => Error::llm(format!("{}: {}", context, msg)),
        other => Error::llm(format!("{}: {}", context, other)),
    }
}
