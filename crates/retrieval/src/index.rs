//! The per-document passage index.
//!
//! A `DocumentIndex` is built once from a document's extracted text and is
//! read-only afterward; switching documents means building a new index.

use crate::chunker::split_passages;
use crate::types::Passage;
use crate::vocabulary::Vocabulary;
use paperchat_core::AppResult;

/// An immutable lexical index over one document.
///
/// Owns the ordered passages, the fitted vocabulary, and one L2-normalized
/// TF-IDF weight vector per passage. The weight matrix always has exactly
/// one row per passage.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    passages: Vec<Passage>,
    vocabulary: Vocabulary,
    weights: Vec<Vec<f32>>,
}

impl DocumentIndex {
    /// The passages in document order.
    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    /// Number of passages (equals the weight matrix row count).
    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    /// The fitted vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The weight matrix, one row per passage.
    pub fn weights(&self) -> &[Vec<f32>] {
        &self.weights
    }
}

/// Build a `DocumentIndex` from extracted document text.
///
/// Splits the text into overlapping passages, fits a TF-IDF vocabulary over
/// them, and computes one weight vector per passage. Pure computation; no
/// network or file I/O.
///
/// # Errors
/// - `EmptyDocument` if the text is empty or tokenizes to nothing
/// - `InvalidChunking` if `overlap >= chunk_size`
pub fn build_index(text: &str, chunk_size: usize, overlap: usize) -> AppResult<DocumentIndex> {
    let passages = split_passages(text, chunk_size, overlap)?;

    let texts: Vec<&str> = passages.iter().map(|p| p.text.as_str()).collect();
    let vocabulary = Vocabulary::fit(&texts)?;

    let weights: Vec<Vec<f32>> = texts
        .iter()
        .map(|text| vocabulary.transform(text))
        .collect();

    debug_assert_eq!(weights.len(), passages.len());

    tracing::info!(
        "Built index: {} passages, {} vocabulary terms",
        passages.len(),
        vocabulary.len()
    );

    Ok(DocumentIndex {
        passages,
        vocabulary,
        weights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperchat_core::AppError;

    #[test]
    fn test_build_index_row_count_matches_passages() {
        let text = "Machine learning is a field of study. ".repeat(50);
        let index = build_index(&text, 200, 50).unwrap();

        assert!(index.passage_count() >= 1);
        assert_eq!(index.weights().len(), index.passage_count());
    }

    #[test]
    fn test_build_index_empty_text() {
        assert!(matches!(
            build_index("", 100, 10),
            Err(AppError::EmptyDocument)
        ));
    }

    #[test]
    fn test_build_index_no_tokens() {
        // Punctuation-only text splits into passages but yields no terms
        assert!(matches!(
            build_index("?! ... --- !!", 10, 2),
            Err(AppError::EmptyDocument)
        ));
    }

    #[test]
    fn test_build_index_invalid_chunking() {
        assert!(matches!(
            build_index("some text here", 100, 150),
            Err(AppError::InvalidChunking { .. })
        ));
    }

    #[test]
    fn test_rows_are_unit_vectors() {
        let text = "Transformers rely on attention mechanisms. \
                    Attention lets models weigh tokens. \
                    Recurrent networks process tokens sequentially.";
        let index = build_index(text, 60, 10).unwrap();

        for row in index.weights() {
            let norm: f32 = row.iter().map(|x| x * x).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 0.001);
        }
    }
}
