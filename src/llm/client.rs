use super::types::*;
use crate::{Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::debug;

/// Fixed third-party completion endpoint.
pub const API_BASE_URL: &str = "https://api.aimlapi.com/v1";

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn create_completion(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self::with_api_base(config, API_BASE_URL)
    }

    pub fn with_api_base(config: LlmConfig, base_url: &str) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key)
            .with_api_base(base_url);

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn create_completion(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        debug!(
            "Creating completion with model {} for image {}",
            request.model, request.image_url
        );

        let messages = request.to_openai_messages()?;

        let openai_request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(&request.model)
            .messages(messages)
            .max_tokens(request.max_tokens)
            .build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received completion response with {} choices",
            response.choices.len()
        );

        let choices: Vec<Choice> = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                message: AssistantMessage {
                    content: choice.message.content.unwrap_or_default(),
                },
                finish_reason: choice.finish_reason.map(|fr| format!("{fr:?}")),
            })
            .collect();

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(CompletionResponse {
            id: response.id,
            model: response.model,
            choices,
            usage,
        })
    }
}
