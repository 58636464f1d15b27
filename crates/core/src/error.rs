//! Error types for paperchat.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application: configuration, I/O, LLM transport, paper lookup,
//! text extraction, indexing, retrieval, and answer generation.

use thiserror::Error;

/// Unified error type for paperchat.
///
/// All fallible functions in the application return `Result<T, AppError>`.
/// We never panic — errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// LLM provider transport/auth errors
    #[error("LLM error: {0}")]
    Llm(String),

    /// Paper lookup and download errors (arXiv API)
    #[error("arXiv error: {0}")]
    Arxiv(String),

    /// PDF text extraction errors
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Document had no extractable text; terminal for that document
    #[error("Document contains no extractable text")]
    EmptyDocument,

    /// Chunking parameters are inconsistent; a programmer/config error
    #[error("Invalid chunking parameters: overlap ({overlap}) must be smaller than chunk size ({chunk_size})")]
    InvalidChunking { chunk_size: usize, overlap: usize },

    /// Retrieval precondition violations
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// Answer generation failed; wraps the underlying LLM capability failure.
    /// Recoverable by the caller (retry or a user-visible "try again").
    #[error("Answer generation failed: {0}")]
    AnswerGeneration(String),

    /// Prompt rendering errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_chunking_message() {
        let err = AppError::InvalidChunking {
            chunk_size: 100,
            overlap: 150,
        };
        let msg = err.to_string();
        assert!(msg.contains("150"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn test_answer_generation_carries_cause() {
        let cause = AppError::Llm("connection timed out".to_string());
        let err = AppError::AnswerGeneration(cause.to_string());
        assert!(err.to_string().contains("connection timed out"));
    }
}
