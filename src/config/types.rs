use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub supabase: SupabaseConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default)]
    pub invite: InviteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Connection settings for the Supabase auth API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
}

/// Generation provider settings. The defaults point at Gemini's
/// OpenAI-compatible endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default = "default_recent_window_secs")]
    pub recent_window_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteConfig {
    #[serde(default = "default_accept_url")]
    pub accept_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            api_key: String::new(),
            text_model: default_text_model(),
            embedding_model: default_embedding_model(),
        }
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            recent_window_secs: default_recent_window_secs(),
        }
    }
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            accept_url: default_accept_url(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_llm_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
}

fn default_text_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-004".to_string()
}

fn default_recent_window_secs() -> u64 {
    30
}

fn default_accept_url() -> String {
    "http://localhost:3000/api/accept-invite".to_string()
}
