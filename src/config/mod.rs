mod types;

pub use types::*;

use crate::Result;
use std::{collections::HashMap, env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_file(&config_path).await?;
    apply_overrides(&mut config, &env::vars().collect());

    Ok(config)
}

/// Reads the YAML file at `path`, falling back to defaults when it does not exist.
pub async fn load_file(path: &str) -> Result<Config> {
    if !Path::new(path).exists() {
        debug!("No configuration file at {}, using defaults", path);
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Environment values win over whatever the file provided.
pub fn apply_overrides(config: &mut Config, vars: &HashMap<String, String>) {
    let get = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();

    if let Some(url) = get("SUPABASE_URL") {
        config.supabase.url = url;
    }
    if let Some(key) = get("SUPABASE_ANON_KEY") {
        config.supabase.anon_key = key;
    }
    if let Some(key) = get("GOOGLE_API_KEY") {
        config.llm.api_key = key;
    }
    if let Some(url) = get("SLACK_WEBHOOK_URL") {
        config.slack.webhook_url = Some(url);
    }
    if let Some(url) = get("INVITE_ACCEPT_URL") {
        config.invite.accept_url = url;
    }
}
