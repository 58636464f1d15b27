//! Grounded answer generation.
//!
//! Assembles the ranked passages into a context block and asks the LLM for
//! an answer constrained to that context.

use crate::index::DocumentIndex;
use crate::ranker::rank;
use paperchat_core::{AppError, AppResult};
use paperchat_llm::{LlmClient, LlmRequest};
use paperchat_prompt::{build_prompt, qa_prompt};
use std::collections::HashMap;

/// Generate a grounded answer from ranked context passages.
///
/// Passages are joined in ranked order, separated by a blank line, and sent
/// with the question in a single non-streaming completion. The model's text
/// is returned verbatim — no post-processing, no citation injection.
///
/// Exactly one attempt is made per call; retries are the caller's decision.
///
/// # Errors
/// Any failure of the LLM capability (transport, auth, malformed response)
/// maps to `AnswerGeneration` carrying the cause. This function never
/// converts a failure into an answer-shaped string.
pub async fn answer(
    client: &dyn LlmClient,
    model: &str,
    question: &str,
    context_passages: &[&str],
) -> AppResult<String> {
    let context = context_passages.join("\n\n");

    let mut variables = HashMap::new();
    variables.insert("context".to_string(), context);
    variables.insert("question".to_string(), question.to_string());

    let prompt = build_prompt(&qa_prompt(), variables)?;

    let mut request = LlmRequest::new(prompt.user, model);
    if let Some(system) = prompt.system {
        request = request.with_system(system);
    }

    tracing::debug!(
        "Requesting answer ({} context passages, provider: {})",
        context_passages.len(),
        client.provider_name()
    );

    let response = client
        .complete(&request)
        .await
        .map_err(|e| AppError::AnswerGeneration(e.to_string()))?;

    Ok(response.content)
}

/// Rank the index against the question and answer from the top passages.
///
/// Convenience wrapper the CLI uses for its per-question request/response
/// calls.
pub async fn answer_question(
    index: &DocumentIndex,
    question: &str,
    top_n: usize,
    client: &dyn LlmClient,
    model: &str,
) -> AppResult<String> {
    let retrieved = rank(index, question, top_n)?;
    let passages = retrieved.texts();
    answer(client, model, question, &passages).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperchat_llm::{LlmResponse, LlmUsage};

    /// Stub client that succeeds and records nothing.
    struct EchoClient;

    #[async_trait::async_trait]
    impl LlmClient for EchoClient {
        fn provider_name(&self) -> &str {
            "echo"
        }

        async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
            Ok(LlmResponse {
                content: format!("echo: {}", request.prompt),
                model: request.model.clone(),
                usage: LlmUsage::default(),
            })
        }
    }

    /// Stub client that always fails, as a timed-out transport would.
    struct FailingClient;

    #[async_trait::async_trait]
    impl LlmClient for FailingClient {
        fn provider_name(&self) -> &str {
            "failing"
        }

        async fn complete(&self, _request: &LlmRequest) -> AppResult<LlmResponse> {
            Err(AppError::Llm("request timed out".to_string()))
        }
    }

    #[tokio::test]
    async fn test_answer_includes_context_and_question() {
        let client = EchoClient;
        let passages = ["First passage.", "Second passage."];

        let result = answer(&client, "test-model", "What is this?", &passages)
            .await
            .unwrap();

        assert!(result.contains("First passage.\n\nSecond passage."));
        assert!(result.contains("Question: What is this?"));
    }

    #[tokio::test]
    async fn test_answer_failure_is_typed() {
        let client = FailingClient;
        let passages = ["Some context."];

        let result = answer(&client, "test-model", "Does it fail?", &passages).await;

        match result {
            Err(AppError::AnswerGeneration(cause)) => {
                assert!(cause.contains("request timed out"));
            }
            other => panic!("Expected AnswerGeneration error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_answer_question_pipeline() {
        let text = "Attention mechanisms weigh token relevance. \
                    Convolutions slide filters over inputs. \
                    Recurrent cells carry hidden state forward.";
        let index = crate::index::build_index(text, 60, 10).unwrap();
        let client = EchoClient;

        let result = answer_question(&index, "how does attention work", 2, &client, "test-model")
            .await
            .unwrap();

        assert!(result.starts_with("echo: "));
        assert!(result.contains("attention"));
    }
}
