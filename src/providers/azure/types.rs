use serde::{Deserialize, Serialize};

/// Request body for the Azure OpenAI chat completions endpoint.
///
/// The deployment (model) is part of the URL, not the body, so a single-turn
/// request is just the message list.
#[derive(Debug, Serialize)]
pub struct ChatCompletionsRequest {
    pub messages: Vec<ChatMessage>,
}

/// One chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response body for the chat completions endpoint. Only the fields the
/// gateway reads are modeled.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionsResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    /// Completion text; `null` for content-filtered or tool-call responses.
    pub content: Option<String>,
}
