//! Passage splitting with configurable size and overlap.
//!
//! Splits document text with a sliding character window, preferring paragraph
//! and sentence boundaries over hard cuts. A natural boundary may extend a
//! passage slightly beyond the window.

use crate::types::Passage;
use paperchat_core::{AppError, AppResult};

/// Split text into overlapping passages.
///
/// Consecutive passages share `overlap` characters so context is not lost at
/// boundaries. Returns at least one passage for any text with content.
///
/// # Errors
/// - `InvalidChunking` if `overlap >= chunk_size`
/// - `EmptyDocument` if `text` is empty or whitespace-only
pub fn split_passages(text: &str, chunk_size: usize, overlap: usize) -> AppResult<Vec<Passage>> {
    if overlap >= chunk_size {
        return Err(AppError::InvalidChunking {
            chunk_size,
            overlap,
        });
    }

    if text.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }

    // How far past the window a natural boundary may reach
    let slack = (chunk_size / 5).max(1);

    let mut passages = Vec::new();
    let mut position = 0u32;
    let mut start = 0;

    while start < text.len() {
        let mut hard_end = char_floor(text, (start + chunk_size).min(text.len()));
        if hard_end <= start {
            hard_end = char_ceil(text, start + 1);
        }

        let end = if hard_end == text.len() {
            text.len()
        } else {
            find_break(text, start, hard_end, slack)
        };

        let passage_text = text[start..end].trim();
        if !passage_text.is_empty() {
            passages.push(Passage {
                position,
                text: passage_text.to_string(),
            });
            position += 1;
        }

        if end == text.len() {
            break;
        }

        // Step back by the overlap, but always make forward progress
        let next_start = end.saturating_sub(overlap).max(start + 1);
        start = char_ceil(text, next_start);
    }

    if passages.is_empty() {
        return Err(AppError::EmptyDocument);
    }

    tracing::debug!(
        "Split text into {} passages (size: {}, overlap: {})",
        passages.len(),
        chunk_size,
        overlap
    );

    Ok(passages)
}

/// Find a natural break point near `hard_end`, falling back to the hard cut.
///
/// Searches the second half of the window plus `slack` characters beyond it,
/// trying paragraph breaks first, then sentence boundaries, then line breaks.
fn find_break(text: &str, start: usize, hard_end: usize, slack: usize) -> usize {
    let min_end = char_ceil(text, start + (hard_end - start) / 2);
    let max_end = char_floor(text, (hard_end + slack).min(text.len()));

    if min_end >= max_end {
        return hard_end;
    }

    let window = &text[min_end..max_end];

    // (pattern, bytes of the match to keep in the passage)
    let boundaries: [(&str, usize); 6] = [
        ("\n\n", 0),
        (". ", 1),
        (".\n", 1),
        ("! ", 1),
        ("? ", 1),
        ("\n", 0),
    ];

    for (pattern, keep) in boundaries {
        if let Some(idx) = window.rfind(pattern) {
            let pos = min_end + idx + keep;
            if pos > start {
                return pos;
            }
        }
    }

    hard_end
}

/// Largest char boundary at or below `index`.
fn char_floor(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Smallest char boundary at or above `index`.
fn char_ceil(text: &str, mut index: usize) -> usize {
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index.min(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let text = "a".repeat(1000);
        let passages = split_passages(&text, 200, 50).unwrap();

        assert!(!passages.is_empty());
        assert_eq!(passages[0].position, 0);
        assert_eq!(passages[1].position, 1);
    }

    #[test]
    fn test_split_no_overlap() {
        let text = "a".repeat(300);
        let passages = split_passages(&text, 100, 0).unwrap();

        assert_eq!(passages.len(), 3);
        for passage in &passages {
            assert_eq!(passage.text.len(), 100);
        }
    }

    #[test]
    fn test_split_empty_is_error() {
        assert!(matches!(
            split_passages("", 100, 10),
            Err(AppError::EmptyDocument)
        ));
        assert!(matches!(
            split_passages("   \n\t ", 100, 10),
            Err(AppError::EmptyDocument)
        ));
    }

    #[test]
    fn test_split_invalid_params() {
        let result = split_passages("some text", 100, 150);
        assert!(matches!(
            result,
            Err(AppError::InvalidChunking {
                chunk_size: 100,
                overlap: 150
            })
        ));

        // Equal overlap is also invalid
        assert!(split_passages("some text", 100, 100).is_err());
    }

    #[test]
    fn test_split_short_text_single_passage() {
        let passages = split_passages("short text", 100, 10).unwrap();
        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].text, "short text");
    }

    #[test]
    fn test_split_prefers_sentence_boundaries() {
        let text = "Sentence one. Sentence two. Sentence three.";
        let passages = split_passages(text, 20, 5).unwrap();

        assert!(passages.len() >= 2);
        for passage in &passages {
            // Bounded by the window plus the natural-boundary slack
            assert!(passage.text.len() <= 20 + 4, "too long: {:?}", passage.text);
        }
        assert_eq!(passages[0].text, "Sentence one.");
    }

    #[test]
    fn test_split_prefers_paragraph_boundaries() {
        let text = "First paragraph here.\n\nSecond paragraph follows with more words in it.";
        let passages = split_passages(text, 30, 5).unwrap();

        assert!(passages.len() >= 2);
        assert_eq!(passages[0].text, "First paragraph here.");
    }

    #[test]
    fn test_split_overlap_present() {
        let text = "abcdefghijklmnopqrstuvwxyz".repeat(10);
        let passages = split_passages(&text, 50, 10).unwrap();

        assert!(passages.len() >= 2);
        let first_tail: String = passages[0].text.chars().rev().take(10).collect();
        let second_head: String = passages[1].text.chars().take(10).collect();
        assert!(
            first_tail.chars().any(|c| second_head.contains(c)),
            "Expected overlap between passages"
        );
    }

    #[test]
    fn test_split_utf8_safety() {
        let text = "Résumé façade naïve — ensembles de modèles entraînés. ".repeat(20);
        let passages = split_passages(&text, 40, 8).unwrap();

        assert!(!passages.is_empty());
        // Reconstructible as valid strings means no char boundary was violated
        for passage in &passages {
            assert!(!passage.text.is_empty());
        }
    }

    #[test]
    fn test_positions_are_document_order() {
        let text = "word ".repeat(200);
        let passages = split_passages(&text, 50, 10).unwrap();

        for (i, passage) in passages.iter().enumerate() {
            assert_eq!(passage.position as usize, i);
        }
    }
}
