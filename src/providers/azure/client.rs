use std::time::Duration;

use reqwest::Client;

use super::types::{ChatCompletionsRequest, ChatCompletionsResponse, ChatMessage};
use crate::config::GatewayConfig;
use crate::provider::CompletionProvider;
use crate::Error;

/// Azure OpenAI provider implementation.
///
/// Sends one non-streaming chat completions request per call and returns the
/// first choice's text. Every failure surfaced by the client (transport,
/// non-2xx status, malformed payload) is wrapped into a single
/// [`Error::Provider`] value carrying the original error text.
pub struct AzureOpenAiProvider {
    client: Client,
    endpoint: String,
    api_key: String,
    api_version: String,
    deployment: String,
}

impl AzureOpenAiProvider {
    /// Create a new Azure OpenAI provider.
    pub fn new(
        endpoint: String,
        api_key: String,
        api_version: String,
        deployment: String,
    ) -> Result<Self, Error> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            api_version,
            deployment,
        })
    }

    /// Create a provider from gateway configuration.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, Error> {
        Self::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            config.api_version.clone(),
            config.deployment.clone(),
        )
    }

    /// The chat completions URL for the configured deployment.
    fn request_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }
}

#[async_trait::async_trait]
impl CompletionProvider for AzureOpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, Error> {
        let request = ChatCompletionsRequest {
            messages: vec![ChatMessage::user(prompt)],
        };

        let response = self
            .client
            .post(self.request_url())
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::provider("azure", format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::provider(
                "azure",
                format!("API error ({status}): {error_text}"),
            ));
        }

        let body: ChatCompletionsResponse = response
            .json()
            .await
            .map_err(|e| Error::provider("azure", format!("malformed response: {e}")))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| Error::provider("azure", "response contained no completion text"))
    }
}
