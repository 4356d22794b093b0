//! Error types for document extraction and model access

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for doc-embed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by extraction, embedding, and generation
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Failed to extract text from a document
    #[error("failed to extract text from '{filename}': {message}")]
    Extraction { filename: String, message: String },

    /// Embedding error
    #[error("embedding generation failed: {0}")]
    Embedding(String),

    /// LLM generation error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create an extraction error
    pub fn extraction(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extraction {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding(message.into())
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether retrying the operation could plausibly succeed.
    ///
    /// Only transport-level failures (connection refused, request timeout)
    /// qualify; HTTP status errors and parse failures do not.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_connect() || e.is_timeout())
    }
}
