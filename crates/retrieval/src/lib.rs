//! Retrieval-and-answer pipeline for paperchat.
//!
//! Turns a paper's extracted text into an immutable lexical index
//! ([`DocumentIndex`]), ranks its passages against a question by TF-IDF
//! cosine similarity, and generates an answer grounded in the top passages
//! via an LLM.
//!
//! The pipeline is synchronous request/response with no internal state:
//! callers hold the index for the lifetime of a QA session and discard it
//! when switching documents. The index is read-only, so concurrent ranking
//! calls against the same index are safe without locking.

pub mod answerer;
pub mod chunker;
pub mod index;
pub mod ranker;
pub mod types;
pub mod vocabulary;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use answerer::{answer, answer_question};
pub use index::{build_index, DocumentIndex};
pub use ranker::rank;
pub use types::{Passage, RetrievalResult, ScoredPassage};
pub use vocabulary::Vocabulary;
