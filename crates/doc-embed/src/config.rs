//! Configuration for extraction and model access

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocEmbedConfig {
    /// Ollama/LLM configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl DocEmbedConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&contents)
            .map_err(|e| Error::config(format!("failed to parse '{}': {}", path.as_ref().display(), e)))
    }
}

/// LLM (Ollama) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Ollama base URL
    pub base_url: String,
    /// Embedding model name
    pub embed_model: String,
    /// Embedding dimensions (768 for nomic-embed-text)
    pub embed_dimensions: usize,
    /// Generation model name
    pub generate_model: String,
    /// Default temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retries for transient request failures
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            embed_model: "nomic-embed-text".to_string(),
            embed_dimensions: 768,
            generate_model: "llama3.1".to_string(),
            temperature: 0.7,
            timeout_secs: 40,
            max_retries: 1,
        }
    }
}

/// Extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Number of embedding requests in flight per document (1 = sequential)
    pub parallel_embeddings: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            parallel_embeddings: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DocEmbedConfig::default();
        assert_eq!(config.llm.base_url, "http://localhost:11434");
        assert_eq!(config.llm.embed_model, "nomic-embed-text");
        assert_eq!(config.llm.max_retries, 1);
        assert_eq!(config.extraction.parallel_embeddings, 4);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: DocEmbedConfig = toml::from_str(
            r#"
            [llm]
            base_url = "http://10.0.0.5:11434"
            embed_model = "nomic-embed-text"
            embed_dimensions = 768
            generate_model = "qwen2.5:0.5b"
            temperature = 0.1
            timeout_secs = 40
            max_retries = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.base_url, "http://10.0.0.5:11434");
        assert_eq!(config.llm.generate_model, "qwen2.5:0.5b");
        // Omitted sections fall back to defaults
        assert_eq!(config.extraction.parallel_embeddings, 4);
    }
}
