//! arXiv integration for paperchat.
//!
//! Provides the collaborators around the retrieval core: paper search over
//! the arXiv Atom API, LLM-backed translation of research topics into API
//! queries, and PDF download with plain-text extraction.

pub mod query;
pub mod search;
pub mod text;
pub mod types;

// Re-export main entry points
pub use query::translate_query;
pub use search::search_papers;
pub use text::fetch_paper_text;
pub use types::Paper;
