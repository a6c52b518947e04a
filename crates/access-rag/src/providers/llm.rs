//! Chat completion provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for chat-completion answer generation
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Run a single system + user completion, returning the model text verbatim
    async fn complete(&self, system: &str, user: &str) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// The model being used
    fn model(&self) -> &str;
}
