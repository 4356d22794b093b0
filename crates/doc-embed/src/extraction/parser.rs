//! PDF text extraction

use sha2::{Digest, Sha256};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};

/// Hard limit on how long the primary extractor may run; some PDFs with
/// exotic font tables make pdf-extract spin.
const EXTRACT_TIMEOUT: Duration = Duration::from_secs(60);

/// Parsed PDF with concatenated page text
#[derive(Debug, Clone)]
pub struct ParsedPdf {
    /// Extracted text, all pages in order
    pub content: String,
    /// Total pages, when the document structure is readable
    pub total_pages: Option<u32>,
    /// SHA-256 of the source bytes
    pub content_hash: String,
}

/// PDF parser with a lopdf fallback path
pub struct PdfParser;

impl PdfParser {
    /// Extract the text of every page, in order, into one string.
    ///
    /// The source bytes are parsed from memory; nothing holds the file open
    /// past the caller's read.
    pub fn parse(filename: &str, data: &[u8]) -> Result<ParsedPdf> {
        let content = Self::extract_with_timeout(filename, data)?;
        let content = normalize_extracted_text(&content);

        if content.trim().is_empty() {
            return Err(Error::extraction(
                filename,
                "no text content could be extracted",
            ));
        }

        let total_pages = lopdf::Document::load_mem(data)
            .ok()
            .map(|doc| doc.get_pages().len() as u32);

        let content_hash = hex::encode(Sha256::digest(data));

        Ok(ParsedPdf {
            content,
            total_pages,
            content_hash,
        })
    }

    /// Run pdf-extract on a separate thread so a hang degrades into the
    /// fallback instead of blocking the caller forever.
    fn extract_with_timeout(filename: &str, data: &[u8]) -> Result<String> {
        let (tx, rx) = mpsc::channel();
        let data_vec = data.to_vec();

        thread::spawn(move || {
            let result = pdf_extract::extract_text_from_mem(&data_vec);
            let _ = tx.send(result);
        });

        match rx.recv_timeout(EXTRACT_TIMEOUT) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => {
                tracing::warn!("pdf-extract failed: {}, trying lopdf fallback", e);
                Self::extract_text_fallback(filename, data)
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                tracing::error!(
                    "PDF extraction timed out after {:?} - document may have complex fonts",
                    EXTRACT_TIMEOUT
                );
                Self::extract_text_fallback(filename, data)
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                tracing::error!("PDF extraction thread crashed");
                Self::extract_text_fallback(filename, data)
            }
        }
    }

    /// Fallback extraction reading page content streams through lopdf
    fn extract_text_fallback(filename: &str, data: &[u8]) -> Result<String> {
        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| Error::extraction(filename, format!("failed to load PDF: {}", e)))?;

        let mut text = String::new();
        for page_number in doc.get_pages().keys() {
            if let Ok(page_text) = doc.extract_text(&[*page_number]) {
                text.push_str(&page_text);
                text.push('\n');
            }
        }

        if text.trim().is_empty() {
            return Err(Error::extraction(
                filename,
                "PDF appears to be image-based or has no extractable text",
            ));
        }

        Ok(text)
    }
}

/// Replace ligatures and typographic punctuation that PDF fonts emit with
/// their plain-text equivalents, so paragraph text embeds cleanly.
pub fn normalize_extracted_text(text: &str) -> String {
    text.replace('\u{2018}', "'")
        .replace('\u{2019}', "'")
        .replace('\u{201C}', "\"")
        .replace('\u{201D}', "\"")
        .replace('\u{2013}', "-")
        .replace('\u{2014}', "--")
        .replace('\u{2026}', "...")
        .replace('\u{00A0}', " ")
        .replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_typographic_punctuation() {
        let text = "\u{201C}Caf\u{00E9}\u{201D} \u{2013} it\u{2019}s \u{FB01}ne\u{2026}";
        assert_eq!(normalize_extracted_text(text), "\"Caf\u{00E9}\" - it's fine...");
    }

    #[test]
    fn test_normalize_leaves_plain_text_alone() {
        let text = "Intro text.\n\nBody text.";
        assert_eq!(normalize_extracted_text(text), text);
    }

    #[test]
    fn test_parse_rejects_garbage_bytes() {
        let result = PdfParser::parse("garbage.pdf", b"not a pdf at all");
        assert!(matches!(result, Err(Error::Extraction { .. })));
    }
}
