//! Retrieval type definitions.

use serde::{Deserialize, Serialize};

/// A contiguous slice of document text used as a retrieval unit.
///
/// Passages are bounded to a maximum character length, share a fixed overlap
/// with their neighbors, and are immutable once created. `position` is the
/// index in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passage {
    /// Position within the document
    pub position: u32,

    /// Text content
    pub text: String,
}

/// A passage paired with its relevance score for a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPassage {
    /// The retrieved passage
    pub passage: Passage,

    /// Cosine similarity between the question vector and the passage vector
    pub score: f32,
}

/// Result of ranking passages against a question.
///
/// Hits are ordered by descending score; ties resolve to document order, so
/// the sequence is a well-defined total order. Transient, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// Retrieved passages with scores, best first
    pub hits: Vec<ScoredPassage>,
}

impl RetrievalResult {
    /// Number of retrieved passages.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether the result is empty.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Passage texts in ranked order.
    pub fn texts(&self) -> Vec<&str> {
        self.hits
            .iter()
            .map(|hit| hit.passage.text.as_str())
            .collect()
    }
}
