use std::env;
use std::path::PathBuf;

/// Configuration for the gateway: file locations and Azure OpenAI credentials.
///
/// Every field has a hardcoded fallback so [`GatewayConfig::from_env`] never
/// fails; a missing API key surfaces later as an authentication error from
/// the backend rather than a local validation error.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Path of the JSON cache file.
    pub cache_path: PathBuf,
    /// Directory holding the daily audit log files.
    pub log_dir: PathBuf,
    /// Azure OpenAI resource endpoint, e.g. `https://myresource.openai.azure.com`.
    pub endpoint: String,
    /// Azure OpenAI API key.
    pub api_key: String,
    /// Azure OpenAI API version string.
    pub api_version: String,
    /// Deployment (model) name.
    pub deployment: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from("llm_cache.json"),
            log_dir: PathBuf::from("logs"),
            endpoint: "https://someendpoint.openai.azure.com".to_string(),
            api_key: String::new(),
            api_version: "2024-12-01-preview".to_string(),
            deployment: "gpt-4o".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for any that are unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_path: defaults.cache_path,
            log_dir: env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            endpoint: env::var("AZURE_OPENAI_ENDPOINT").unwrap_or(defaults.endpoint),
            api_key: env::var("AZURE_OPENAI_KEY").unwrap_or(defaults.api_key),
            api_version: env::var("AZURE_OPENAI_API_VERSION").unwrap_or(defaults.api_version),
            deployment: env::var("AZURE_OPENAI_DEPLOYMENT").unwrap_or(defaults.deployment),
        }
    }

    /// Set the cache file path.
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }

    /// Set the audit log directory.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    /// Set the Azure OpenAI endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the Azure OpenAI API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the Azure OpenAI API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the deployment (model) name.
    pub fn with_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = deployment.into();
        self
    }
}
