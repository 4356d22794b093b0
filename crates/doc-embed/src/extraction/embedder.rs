//! Document embedding extraction
//!
//! Turns a PDF into one embedding vector per paragraph: read, extract,
//! segment, then fan the embedding requests out with a bounded concurrency
//! that preserves paragraph order in the output.

use futures_util::future::join_all;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::config::ExtractionConfig;
use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;

use super::paragraphs::split_paragraphs;
use super::parser::PdfParser;

/// Result of extracting and embedding one document.
///
/// `embeddings[i]` is the vector for `paragraphs[i]`; the two are always
/// the same length.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    /// Full extracted text, all pages in order
    pub raw_text: String,
    /// Trimmed, non-empty paragraphs in source order
    pub paragraphs: Vec<String>,
    /// One embedding per paragraph, index-aligned
    pub embeddings: Vec<Vec<f32>>,
    /// Page count, when the document structure is readable
    pub total_pages: Option<u32>,
    /// SHA-256 of the source bytes
    pub content_hash: String,
}

/// Extracts a PDF and embeds each paragraph through an embedding provider
pub struct DocumentEmbedder {
    provider: Arc<dyn EmbeddingProvider>,
    parallel_embeddings: usize,
}

impl DocumentEmbedder {
    /// Create a new document embedder
    pub fn new(provider: Arc<dyn EmbeddingProvider>, config: &ExtractionConfig) -> Self {
        Self {
            provider,
            parallel_embeddings: config.parallel_embeddings.max(1),
        }
    }

    /// Extract text from the PDF at `path` and embed every paragraph.
    ///
    /// A missing file is a `MissingInput` error before any I/O or network
    /// traffic. Any extraction or embedding failure aborts the whole
    /// operation; partial results are never returned.
    pub async fn extract(&self, path: &Path) -> Result<ExtractedDocument> {
        if !path.exists() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let data = tokio::fs::read(path).await?;
        let parsed = PdfParser::parse(&filename, &data)?;

        let paragraphs = split_paragraphs(&parsed.content);
        tracing::info!(
            "Extracted {} paragraphs from '{}' ({} pages)",
            paragraphs.len(),
            filename,
            parsed
                .total_pages
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string()),
        );

        let embeddings = self.embed_paragraphs(&paragraphs).await?;

        Ok(ExtractedDocument {
            raw_text: parsed.content,
            paragraphs,
            embeddings,
            total_pages: parsed.total_pages,
            content_hash: parsed.content_hash,
        })
    }

    /// Embed each paragraph, at most `parallel_embeddings` requests in
    /// flight, returning vectors in paragraph order.
    ///
    /// One failed request fails the whole batch.
    pub async fn embed_paragraphs(&self, paragraphs: &[String]) -> Result<Vec<Vec<f32>>> {
        let semaphore = Arc::new(Semaphore::new(self.parallel_embeddings));

        let futures: Vec<_> = paragraphs
            .iter()
            .map(|paragraph| {
                let provider = Arc::clone(&self.provider);
                let semaphore = Arc::clone(&semaphore);
                let text = paragraph.clone();

                async move {
                    let _permit = semaphore
                        .acquire()
                        .await
                        .map_err(|_| Error::embedding("embedding semaphore closed"))?;
                    provider.embed(&text).await
                }
            })
            .collect();

        // join_all yields results in input order regardless of completion order
        let results = join_all(futures).await;

        let mut embeddings = Vec::with_capacity(results.len());
        for result in results {
            embeddings.push(result?);
        }
        Ok(embeddings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Embeds `[text.len()]` so alignment is checkable from the text alone.
    /// Earlier arrivals sleep longer to force out-of-order completion.
    struct StubEmbedder {
        calls: AtomicUsize,
        fail_on: Option<&'static str>,
        staggered: bool,
    }

    impl StubEmbedder {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_on: None,
                staggered: false,
            }
        }
    }

    #[async_trait]
    impl EmbeddingProvider for StubEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>> {
            let arrival = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.staggered {
                let delay = 60u64.saturating_sub(arrival as u64 * 20);
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            if self.fail_on == Some(text) {
                return Err(Error::embedding("stub failure"));
            }
            Ok(vec![text.len() as f32])
        }

        fn dimensions(&self) -> usize {
            1
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn embedder(stub: StubEmbedder, parallel: usize) -> (Arc<StubEmbedder>, DocumentEmbedder) {
        let provider = Arc::new(stub);
        let config = ExtractionConfig {
            parallel_embeddings: parallel,
        };
        (
            Arc::clone(&provider),
            DocumentEmbedder::new(provider, &config),
        )
    }

    #[tokio::test]
    async fn test_embeddings_align_with_paragraphs() {
        let (_, embedder) = embedder(StubEmbedder::new(), 1);
        let paragraphs = vec!["Intro text.".to_string(), "Conclusion.".to_string()];

        let embeddings = embedder.embed_paragraphs(&paragraphs).await.unwrap();

        assert_eq!(embeddings.len(), paragraphs.len());
        for (paragraph, embedding) in paragraphs.iter().zip(&embeddings) {
            assert_eq!(embedding, &vec![paragraph.len() as f32]);
        }
    }

    #[tokio::test]
    async fn test_fan_out_preserves_order() {
        let stub = StubEmbedder {
            staggered: true,
            ..StubEmbedder::new()
        };
        let (_, embedder) = embedder(stub, 4);
        let paragraphs: Vec<String> = vec!["a", "bbb", "ccccc"]
            .into_iter()
            .map(str::to_string)
            .collect();

        let embeddings = embedder.embed_paragraphs(&paragraphs).await.unwrap();

        assert_eq!(
            embeddings,
            vec![vec![1.0], vec![3.0], vec![5.0]],
            "output must follow paragraph order, not completion order"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_typed_and_makes_no_calls() {
        let (provider, embedder) = embedder(StubEmbedder::new(), 1);

        let result = embedder.extract(Path::new("/no/such/file.pdf")).await;

        assert!(matches!(result, Err(Error::MissingInput(_))));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_failure_aborts_the_batch() {
        let stub = StubEmbedder {
            fail_on: Some("bad"),
            ..StubEmbedder::new()
        };
        let (_, embedder) = embedder(stub, 1);
        let paragraphs: Vec<String> = vec!["ok", "bad", "also ok"]
            .into_iter()
            .map(str::to_string)
            .collect();

        let result = embedder.embed_paragraphs(&paragraphs).await;

        assert!(matches!(result, Err(Error::Embedding(_))));
    }

    #[test]
    fn test_no_paragraphs_means_no_embeddings() {
        let (provider, embedder) = embedder(StubEmbedder::new(), 4);

        let embeddings = tokio_test::block_on(embedder.embed_paragraphs(&[])).unwrap();

        assert!(embeddings.is_empty());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }
}
