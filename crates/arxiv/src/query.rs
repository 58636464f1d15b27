//! Topic-to-query translation.
//!
//! Turns a free-form research topic into an arXiv API search query with a
//! single LLM call. The CLI exposes `--raw` to bypass this step entirely.

use paperchat_core::AppResult;
use paperchat_llm::{LlmClient, LlmRequest};
use paperchat_prompt::{arxiv_query_prompt, build_prompt};
use std::collections::HashMap;

/// Translate a research topic into an arXiv search query.
///
/// The few-shot prompt covers field prefixes and submittedDate ranges; the
/// model's output is returned trimmed. LLM failures propagate unmodified.
pub async fn translate_query(
    client: &dyn LlmClient,
    model: &str,
    topic: &str,
) -> AppResult<String> {
    let mut variables = HashMap::new();
    variables.insert("topic".to_string(), topic.to_string());

    let prompt = build_prompt(&arxiv_query_prompt(), variables)?;

    let mut request = LlmRequest::new(prompt.user, model);
    if let Some(system) = prompt.system {
        request = request.with_system(system);
    }

    let response = client.complete(&request).await?;
    let query = response.content.trim().to_string();

    tracing::info!("Translated topic '{}' to query '{}'", topic, query);

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperchat_core::{AppError, AppResult};
    use paperchat_llm::{LlmResponse, LlmUsage};

    /// Stub that returns a fixed translation with padding whitespace.
    struct FixedClient;

    #[async_trait::async_trait]
    impl LlmClient for FixedClient {
        fn provider_name(&self) -> &str {
            "fixed"
        }

        async fn complete(&self, _request: &LlmRequest) -> AppResult<LlmResponse> {
            Ok(LlmResponse {
                content: "  ti:\"retrieval augmented generation\"+AND+cat:cs \n".to_string(),
                model: "test".to_string(),
                usage: LlmUsage::default(),
            })
        }
    }

    struct FailingClient;

    #[async_trait::async_trait]
    impl LlmClient for FailingClient {
        fn provider_name(&self) -> &str {
            "failing"
        }

        async fn complete(&self, _request: &LlmRequest) -> AppResult<LlmResponse> {
            Err(AppError::Llm("auth failure".to_string()))
        }
    }

    #[tokio::test]
    async fn test_translate_query_trims_output() {
        let query = translate_query(&FixedClient, "test", "papers about RAG")
            .await
            .unwrap();
        assert_eq!(query, "ti:\"retrieval augmented generation\"+AND+cat:cs");
    }

    #[tokio::test]
    async fn test_translate_query_propagates_llm_errors() {
        let result = translate_query(&FailingClient, "test", "anything").await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }
}
