//! Prompt system for paperchat.
//!
//! Defines the application's prompt templates and renders them with
//! Handlebars. Two prompts exist: grounded QA over a paper and
//! topic-to-arXiv-query translation.

pub mod builder;
pub mod definitions;
pub mod types;

// Re-export main types
pub use builder::build_prompt;
pub use definitions::{arxiv_query_prompt, qa_prompt};
pub use types::{BuiltPrompt, BuiltPromptMetadata, PromptDefinition};
