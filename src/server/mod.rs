pub mod handlers;
mod types;

pub use types::NotifyResponse;

use crate::{
    Error, Result,
    auth::{IdentityVerifier, SupabaseVerifier},
    config::Config,
    fanout::FanOutHandler,
    llm::{LlmClient, OpenAiClient},
    notify::{SignupNotifier, SlackWebhook},
};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Builds the process-lifetime dependencies from configuration.
pub fn build_state(config: &Config) -> Result<AppState> {
    let verifier: Arc<dyn IdentityVerifier> =
        Arc::new(SupabaseVerifier::new(config.supabase.clone()));
    let llm: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(config.llm.clone()));

    if config.slack.webhook_url.is_none() {
        warn!("SLACK_WEBHOOK_URL is not set; signup notifications will fail");
    }

    let window = i64::try_from(config.slack.recent_window_secs)
        .ok()
        .and_then(chrono::TimeDelta::try_seconds)
        .ok_or_else(|| {
            Error::config(format!(
                "slack.recent_window_secs is out of range: {}",
                config.slack.recent_window_secs
            ))
        })?;

    let notifier = SignupNotifier::new(
        verifier.clone(),
        Arc::new(SlackWebhook::new()),
        config.slack.webhook_url.clone(),
        window,
    );

    Ok(AppState {
        generation: Arc::new(FanOutHandler::new(verifier, llm)),
        notifier: Arc::new(notifier),
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-text", post(handlers::generate_text))
        .route(
            "/api/generate-embeddings",
            post(handlers::generate_embeddings),
        )
        .route("/api/notify-signup", post(handlers::notify_signup))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let app = router(build_state(&config)?);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
