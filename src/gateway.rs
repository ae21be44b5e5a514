//! The Prompt Cache Gateway.
//!
//! Given a prompt, returns a completion, consulting the on-disk cache before
//! the backend and recording every prompt/response in the audit log. The
//! cache sits above the provider: a hit bypasses the network call entirely,
//! and exactly one backend call is made per invocation that is not a hit.

use tracing::{debug, error};

use crate::audit::{preview, AuditLog};
use crate::cache::{CacheHealth, FileCache};
use crate::config::GatewayConfig;
use crate::provider::{CompletionProvider, ProviderKind};
use crate::providers::AzureOpenAiProvider;
use crate::Error;

/// Cache-augmented completion gateway.
pub struct Gateway {
    config: GatewayConfig,
    audit: AuditLog,
    cache: FileCache,
}

impl Gateway {
    /// Build a gateway from configuration, creating the log directory.
    pub fn new(config: GatewayConfig) -> Result<Self, Error> {
        let audit = AuditLog::new(&config.log_dir)?;
        let cache = FileCache::new(&config.cache_path);
        Ok(Self {
            config,
            audit,
            cache,
        })
    }

    /// The configuration this gateway was built with.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Resolve the backend for a provider kind.
    ///
    /// The disabled provider fails here, before any audit, cache, or network
    /// I/O has happened.
    fn build_backend(&self, kind: ProviderKind) -> Result<Box<dyn CompletionProvider>, Error> {
        match kind {
            ProviderKind::Azure => Ok(Box::new(AzureOpenAiProvider::from_config(&self.config)?)),
            ProviderKind::Gemini => Err(Error::ProviderDisabled),
        }
    }

    /// Complete a prompt, selecting the backend by its string identifier.
    ///
    /// An unrecognized identifier fails with [`Error::UnsupportedProvider`]
    /// naming the bad value, before any I/O.
    pub async fn complete(
        &self,
        prompt: &str,
        use_cache: bool,
        provider: &str,
    ) -> Result<String, Error> {
        let kind = provider.parse::<ProviderKind>()?;
        self.complete_with(prompt, use_cache, kind).await
    }

    /// Complete a prompt against a known provider kind.
    pub async fn complete_with(
        &self,
        prompt: &str,
        use_cache: bool,
        kind: ProviderKind,
    ) -> Result<String, Error> {
        let backend = self.build_backend(kind)?;
        self.complete_via(prompt, use_cache, backend.as_ref()).await
    }

    /// Complete a prompt against an explicit backend.
    ///
    /// This is the injectable seam: tests pass a stub to assert call counts
    /// without any network.
    pub async fn complete_via(
        &self,
        prompt: &str,
        use_cache: bool,
        backend: &dyn CompletionProvider,
    ) -> Result<String, Error> {
        self.audit.info(&format!("PROMPT: {prompt}"));

        if use_cache {
            let snapshot = self.cache.load();
            if snapshot.health == CacheHealth::Degraded {
                self.audit
                    .warn("Failed to load cache, starting with empty cache");
            }
            if let Some(cached) = snapshot.entries.get(prompt) {
                debug!("cache hit, skipping backend call");
                self.audit.info(&format!("CACHE HIT: {}", preview(cached)));
                return Ok(cached.clone());
            }
        }

        match backend.complete(prompt).await {
            Ok(text) => {
                self.audit.info(&format!("RESPONSE: {}", preview(&text)));
                if use_cache && self.cache.insert(prompt, &text) == CacheHealth::Degraded {
                    self.audit.error("Failed to save cache");
                }
                Ok(text)
            }
            Err(err) => {
                error!("backend call failed: {err}");
                self.audit.error(&err.to_string());
                Err(err)
            }
        }
    }
}
