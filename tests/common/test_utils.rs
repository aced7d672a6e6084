use chrono::{DateTime, Duration, Utc};
use teamspace_api::{
    Result,
    auth::{Principal, SessionContext},
    config::{Config, InviteConfig, LlmConfig, LogsConfig, ServerConfig, SlackConfig, SupabaseConfig},
};
use tempfile::TempDir;
use tokio::fs;

pub const TEST_USER_ID: &str = "5b7c1c2e-8f7a-4d5e-9b2f-0c1d2e3f4a5b";
pub const TEST_TOKEN: &str = "test-access-token";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        supabase: SupabaseConfig {
            url: "http://localhost:54321".to_string(),
            anon_key: "test-anon-key".to_string(),
        },
        llm: LlmConfig {
            base_url: "http://localhost:9999".to_string(),
            api_key: "test-api-key".to_string(),
            text_model: "gemini-1.5-flash".to_string(),
            embedding_model: "text-embedding-004".to_string(),
        },
        slack: SlackConfig {
            webhook_url: Some("http://localhost:9998/hook".to_string()),
            recent_window_secs: 30,
        },
        invite: InviteConfig {
            accept_url: "http://localhost:3000/api/accept-invite".to_string(),
        },
    }
}

/// A principal whose account was created `age_secs` before `now`.
pub fn principal_created(age_secs: i64, now: DateTime<Utc>) -> Principal {
    Principal {
        id: TEST_USER_ID.to_string(),
        email: Some("new.user@example.com".to_string()),
        created_at: Some(now - Duration::seconds(age_secs)),
    }
}

pub fn test_principal() -> Principal {
    principal_created(3600, Utc::now())
}

pub fn authenticated_session() -> SessionContext {
    SessionContext::new(TEST_TOKEN)
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 3001
  logs:
    level: "debug"

supabase:
  url: "https://project.supabase.co"
  anon_key: "anon"

llm:
  api_key: "file-key"
  text_model: "gemini-1.5-pro"

slack:
  webhook_url: "https://hooks.slack.com/services/T000/B000/XXX"
  recent_window_secs: 45
"#;
