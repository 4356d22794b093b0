//! LLM provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for text generation under a persona system prompt
///
/// Chain steps dispatch through this trait; the production implementation
/// is `OllamaLlm`.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for a prompt
    async fn generate(&self, system: &str, prompt: &str, temperature: f32) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// The model being used
    fn model(&self) -> &str;
}
