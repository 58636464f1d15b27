//! Relevance ranking of passages against a question.

use crate::index::DocumentIndex;
use crate::types::{RetrievalResult, ScoredPassage};
use paperchat_core::{AppError, AppResult};

/// Rank the index's passages against a question and keep the top `top_n`.
///
/// The question is projected into the index vocabulary (out-of-vocabulary
/// terms contribute zero weight) and scored by cosine similarity against
/// every passage vector. Ties break toward the earlier passage, which keeps
/// results deterministic; a question with no vocabulary overlap therefore
/// degrades to the first `top_n` passages in document order rather than
/// failing.
///
/// Returns between 1 and `min(top_n, passage_count)` hits with
/// non-increasing scores.
///
/// # Errors
/// `Retrieval` if `top_n` is zero.
pub fn rank(index: &DocumentIndex, question: &str, top_n: usize) -> AppResult<RetrievalResult> {
    if top_n == 0 {
        return Err(AppError::Retrieval("top_n must be at least 1".to_string()));
    }

    let query = index.vocabulary().transform(question);

    let mut hits: Vec<ScoredPassage> = index
        .passages()
        .iter()
        .zip(index.weights())
        .map(|(passage, row)| ScoredPassage {
            passage: passage.clone(),
            score: dot(&query, row),
        })
        .collect();

    // Stable sort: equal scores keep document order
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    hits.truncate(top_n);

    tracing::debug!(
        "Ranked {} passages (requested top-{}, best score: {:.3})",
        hits.len(),
        top_n,
        hits.first().map(|h| h.score).unwrap_or(0.0)
    );

    Ok(RetrievalResult { hits })
}

/// Dot product of two equally-sized vectors.
///
/// Both sides are L2-normalized by the vocabulary, so this is the cosine
/// similarity.
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
