//! Provider implementations for the supported backend services.

pub mod azure;

// Re-export commonly used provider types
pub use azure::AzureOpenAiProvider;
