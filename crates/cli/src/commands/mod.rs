//! Command handlers for the paperchat CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod ask;
pub mod chat;
pub mod search;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use search::SearchCommand;

use paperchat_core::{config::AppConfig, AppError, AppResult};
use paperchat_llm::LlmClient;
use std::sync::Arc;

/// Create the LLM client for the active provider.
///
/// Resolves the endpoint and API key from configuration and hands both to
/// the factory as explicit values.
pub(crate) fn create_llm_client(config: &AppConfig) -> AppResult<Arc<dyn LlmClient>> {
    let endpoint = config.resolve_endpoint(&config.provider);
    let api_key = config.resolve_api_key(&config.provider);

    paperchat_llm::create_client(
        &config.provider,
        endpoint.as_deref(),
        api_key.as_deref(),
    )
    .map_err(AppError::Config)
}
