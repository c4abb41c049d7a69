use crate::{Error, Result};
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImageArgs,
    ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageArgs,
    ChatCompletionRequestUserMessageContent, ChatCompletionRequestUserMessageContentPart,
    ImageUrlArgs,
};
use serde::{Deserialize, Serialize};

/// An outbound vision completion: a system instruction plus a single user
/// message pairing the instruction text with an image reference.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_text: String,
    pub image_url: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone)]
pub struct Choice {
    pub index: u32,
    pub message: AssistantMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AssistantMessage {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl CompletionRequest {
    pub fn to_openai_messages(&self) -> Result<Vec<ChatCompletionRequestMessage>> {
        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(ChatCompletionRequestSystemMessageContent::Text(
                self.system_prompt.clone(),
            ))
            .build()?;

        let text_part = ChatCompletionRequestMessageContentPartTextArgs::default()
            .text(self.user_text.clone())
            .build()?;
        let image_part = ChatCompletionRequestMessageContentPartImageArgs::default()
            .image_url(ImageUrlArgs::default().url(self.image_url.clone()).build()?)
            .build()?;

        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Array(vec![
                ChatCompletionRequestUserMessageContentPart::Text(text_part),
                ChatCompletionRequestUserMessageContentPart::ImageUrl(image_part),
            ]))
            .build()?;

        Ok(vec![system.into(), user.into()])
    }
}

impl CompletionResponse {
    /// Extracts `choices[0].message.content`, the only part of the upstream
    /// response the relay depends on.
    pub fn into_content(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::upstream("completion response contained no choices"))
    }
}
