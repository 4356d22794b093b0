//! Paragraph segmentation on blank-line boundaries

/// Split extracted text into trimmed, non-empty paragraphs.
///
/// Pieces are delimited by double newlines; whitespace-only pieces are
/// dropped and source order is preserved. Single newlines inside a
/// paragraph are kept.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_segmentation() {
        let text = "Intro text.\n\nBody text.\n\n\n\nConclusion.";
        assert_eq!(
            split_paragraphs(text),
            vec!["Intro text.", "Body text.", "Conclusion."]
        );
    }

    #[test]
    fn test_whitespace_only_pieces_are_dropped() {
        let text = "First.\n\n   \t \n\nSecond.\n\n \n\n";
        assert_eq!(split_paragraphs(text), vec!["First.", "Second."]);
    }

    #[test]
    fn test_single_newlines_stay_inside_a_paragraph() {
        let text = "Line one\nline two\n\nNext paragraph.";
        assert_eq!(
            split_paragraphs(text),
            vec!["Line one\nline two", "Next paragraph."]
        );
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("   \n \n  ").is_empty());
    }

    #[test]
    fn test_segmentation_is_stable() {
        let text = "Alpha.\n\nBeta.\n\nGamma.";
        assert_eq!(split_paragraphs(text), split_paragraphs(text));
    }
}
