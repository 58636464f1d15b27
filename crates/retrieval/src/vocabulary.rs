//! Term-weighting vocabulary fitted over a passage set.
//!
//! Implements TF-IDF with smoothed document frequencies and L2-normalized
//! vectors. Vectors from `transform` are directly comparable by dot product.

use paperchat_core::{AppError, AppResult};
use std::collections::HashMap;

/// A fitted vocabulary: term columns plus inverse-document-frequency weights.
///
/// Read-only after `fit`; questions are projected into the same term space
/// with `transform`, where out-of-vocabulary terms contribute zero weight.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Term to column index
    terms: HashMap<String, usize>,

    /// IDF weight per column
    idf: Vec<f32>,
}

impl Vocabulary {
    /// Fit a vocabulary over a set of passages.
    ///
    /// # Errors
    /// `EmptyDocument` if the passages tokenize to no terms at all (for
    /// example, text recovered from an image-only PDF).
    pub fn fit(passages: &[&str]) -> AppResult<Self> {
        let n_docs = passages.len();

        // Document frequency per term
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for passage in passages {
            let mut seen: Vec<String> = tokenize(passage);
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(AppError::EmptyDocument);
        }

        // Sorted term order keeps column layout deterministic
        let mut sorted_terms: Vec<(String, usize)> = doc_freq.into_iter().collect();
        sorted_terms.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mut terms = HashMap::with_capacity(sorted_terms.len());
        let mut idf = Vec::with_capacity(sorted_terms.len());

        for (column, (term, df)) in sorted_terms.into_iter().enumerate() {
            // Smoothed IDF: ln((1 + n) / (1 + df)) + 1
            let weight = ((1 + n_docs) as f32 / (1 + df) as f32).ln() + 1.0;
            terms.insert(term, column);
            idf.push(weight);
        }

        tracing::debug!(
            "Fitted vocabulary: {} terms over {} passages",
            terms.len(),
            n_docs
        );

        Ok(Self { terms, idf })
    }

    /// Number of terms (vector dimensions).
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    /// Whether the vocabulary is empty. Never true for a fitted vocabulary.
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    /// Project text into the vocabulary space as an L2-normalized TF-IDF
    /// vector. Out-of-vocabulary terms contribute nothing; text with no
    /// vocabulary overlap yields the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0; self.idf.len()];

        for term in tokenize(text) {
            if let Some(&column) = self.terms.get(&term) {
                vector[column] += self.idf[column];
            }
        }

        // Normalize to unit length
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }
}

/// Lowercase alphanumeric tokens of at least two characters.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}
