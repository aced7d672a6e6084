use super::types::NotifyResponse;
use crate::{
    Result,
    auth::SessionContext,
    fanout::FanOutHandler,
    llm::{GenerationMode, GenerationResult},
    notify::SignupNotifier,
};
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Json};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub generation: Arc<FanOutHandler>,
    pub notifier: Arc<SignupNotifier>,
}

pub async fn generate_text(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<GenerationResult>> {
    let session = SessionContext::from_headers(&headers);
    let result = state
        .generation
        .handle(GenerationMode::Text, &body, &session)
        .await?;
    Ok(Json(result))
}

pub async fn generate_embeddings(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<GenerationResult>> {
    let session = SessionContext::from_headers(&headers);
    let result = state
        .generation
        .handle(GenerationMode::Embeddings, &body, &session)
        .await?;
    Ok(Json(result))
}

pub async fn notify_signup(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<NotifyResponse>> {
    let session = SessionContext::from_headers(&headers);
    let outcome = state.notifier.notify(&session).await?;
    info!("Signup notification handled (skipped: {})", outcome.skipped);
    Ok(Json(outcome.into()))
}
