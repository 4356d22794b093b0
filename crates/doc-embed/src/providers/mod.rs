//! Provider abstractions for embeddings and text generation
//!
//! Trait seams between the extractor/chain logic and the model server, so
//! either side can be exercised without the other.

pub mod embedding;
pub mod llm;
pub mod ollama;

pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use ollama::{OllamaEmbedder, OllamaLlm};
