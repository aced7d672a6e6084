use crate::{Error, Result, config::LlmConfig};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent,
        CreateChatCompletionRequestArgs, CreateEmbeddingRequestArgs, EmbeddingInput,
    },
};
use async_trait::async_trait;
use tracing::debug;

/// The external generation provider. One call per unit of input.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String>;

    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Talks to any OpenAI-compatible API; configured by default for Gemini.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    text_model: String,
    embedding_model: String,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            text_model: config.text_model,
            embedding_model: config.embedding_model,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        debug!(
            "Generating text with {} ({} chars of prompt)",
            self.text_model,
            prompt.len()
        );

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Text(
                prompt.to_string(),
            ))
            .build()?;
        let messages: Vec<ChatCompletionRequestMessage> = vec![message.into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.text_model)
            .messages(messages)
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::llm("Provider returned no text"))
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        debug!("Embedding {} chars with {}", text.len(), self.embedding_model);

        let request = CreateEmbeddingRequestArgs::default()
            .model(&self.embedding_model)
            .input(EmbeddingInput::String(text.to_string()))
            .build()?;

        let response = self.client.embeddings().create(request).await?;

        response
            .data
            .into_iter()
            .next()
            .map(|embedding| embedding.embedding)
            .ok_or_else(|| Error::llm("Provider returned no embedding"))
    }
}
