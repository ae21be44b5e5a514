use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Supported backend providers.
///
/// Only [`ProviderKind::Azure`] has a working client. [`ProviderKind::Gemini`]
/// is recognized but disabled and fails at backend construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Azure,
    Gemini,
}

impl ProviderKind {
    /// The identifier used to select this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Azure => "azure",
            ProviderKind::Gemini => "gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "azure" => Ok(ProviderKind::Azure),
            "gemini" => Ok(ProviderKind::Gemini),
            _ => Err(Error::UnsupportedProvider(s.to_string())),
        }
    }
}

/// A backend capable of producing one completion for one prompt.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync + 'static {
    /// Send the prompt as a single-turn request and return the completion text.
    async fn complete(&self, prompt: &str) -> Result<String, Error>;
}
