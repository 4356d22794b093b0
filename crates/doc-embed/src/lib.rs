//! doc-embed: per-paragraph PDF embeddings and sequential persona chains
//! over a local Ollama server.
//!
//! The extractor reads a PDF, segments the text on blank-line boundaries,
//! and produces one embedding vector per paragraph through a configurable
//! embedding provider. Persona chains run fixed prompt-template sequences
//! through a generation provider, threading each step's output into the
//! next step's context.

pub mod chain;
pub mod config;
pub mod daypart;
pub mod error;
pub mod extraction;
pub mod generation;
pub mod providers;

pub use config::DocEmbedConfig;
pub use daypart::DayPart;
pub use error::{Error, Result};
pub use extraction::{DocumentEmbedder, ExtractedDocument};
pub use generation::OllamaClient;
