use thiserror::Error;

/// Errors that can occur when using the llm-gateway library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("Gemini support is currently disabled. Please use the 'azure' provider.")]
    ProviderDisabled,
}

impl Error {
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}
