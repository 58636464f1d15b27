//! Hugging Face Inference Router provider implementation.
//!
//! The router exposes an OpenAI-compatible chat completions API:
//! https://huggingface.co/docs/inference-providers
//! The same wire format works for any OpenAI-compatible endpoint, so the
//! factory also uses this client for custom `openai-compatible` servers.

use crate::client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use paperchat_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Default base URL for the Hugging Face Inference Router.
const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/v1";

/// Chat message in the OpenAI-compatible wire format.
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Chat completions request body.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

/// Chat completions response body.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

/// Hugging Face router LLM client.
pub struct HuggingFaceClient {
    /// Base URL of the OpenAI-compatible API
    base_url: String,

    /// Bearer token for the Authorization header
    api_key: Option<String>,

    /// HTTP client
    client: reqwest::Client,
}

impl HuggingFaceClient {
    /// Create a new client against the Hugging Face router.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, Some(api_key.into()))
    }

    /// Create a new client with a custom base URL.
    ///
    /// `api_key` may be `None` for local OpenAI-compatible servers that do
    /// not require authentication.
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Convert LlmRequest to the chat completions wire format.
    fn to_chat_request(&self, request: &LlmRequest) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(2);

        if let Some(ref system) = request.system {
            messages.push(ChatMessage {
                role: "system",
                content: system.clone(),
            });
        }

        messages.push(ChatMessage {
            role: "user",
            content: request.prompt.clone(),
        });

        ChatCompletionRequest {
            model: request.model.clone(),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        }
    }

    /// Convert a chat completions response to LlmResponse.
    fn convert_response(&self, response: ChatCompletionResponse) -> AppResult<LlmResponse> {
        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::Llm("Response contained no choices".to_string()))?;

        let usage = response
            .usage
            .map(|u| LlmUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        Ok(LlmResponse {
            content,
            model: response.model,
            usage,
        })
    }
}

#[async_trait::async_trait]
impl LlmClient for HuggingFaceClient {
    fn provider_name(&self) -> &str {
        "huggingface"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        tracing::info!("Sending completion request to {}", self.base_url);
        tracing::debug!("Request: {:?}", request);

        let chat_request = self.to_chat_request(request);
        let url = format!("{}/chat/completions", self.base_url);

        let mut http_request = self.client.post(&url).json(&chat_request);
        if let Some(ref api_key) = self.api_key {
            http_request = http_request.bearer_auth(api_key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Llm(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let chat_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse response: {}", e)))?;

        tracing::info!("Received completion");
        tracing::debug!("Response: {:?}", chat_response);

        self.convert_response(chat_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HuggingFaceClient::new("hf_test");
        assert_eq!(client.provider_name(), "huggingface");
        assert_eq!(client.base_url, "https://router.huggingface.co/v1");
    }

    #[test]
    fn test_chat_request_conversion() {
        let client = HuggingFaceClient::new("hf_test");
        let request = LlmRequest::new("What is attention?", "meta-llama/Llama-3.3-70B-Instruct")
            .with_system("You are a research assistant.")
            .with_temperature(0.3)
            .with_max_tokens(1000);

        let chat_req = client.to_chat_request(&request);
        assert_eq!(chat_req.model, "meta-llama/Llama-3.3-70B-Instruct");
        assert_eq!(chat_req.messages.len(), 2);
        assert_eq!(chat_req.messages[0].role, "system");
        assert_eq!(chat_req.messages[1].role, "user");
        assert_eq!(chat_req.messages[1].content, "What is attention?");
        assert_eq!(chat_req.temperature, Some(0.3));
        assert_eq!(chat_req.max_tokens, Some(1000));
        assert!(!chat_req.stream);
    }

    #[test]
    fn test_chat_request_without_system() {
        let client = HuggingFaceClient::new("hf_test");
        let request = LlmRequest::new("Hello", "llama3.3");

        let chat_req = client.to_chat_request(&request);
        assert_eq!(chat_req.messages.len(), 1);
        assert_eq!(chat_req.messages[0].role, "user");
    }

    #[test]
    fn test_convert_response_empty_choices() {
        let client = HuggingFaceClient::new("hf_test");
        let response = ChatCompletionResponse {
            model: "llama3.3".to_string(),
            choices: vec![],
            usage: None,
        };

        let result = client.convert_response(response);
        assert!(result.is_err());
    }

    #[test]
    fn test_convert_response_with_usage() {
        let client = HuggingFaceClient::new("hf_test");
        let response = ChatCompletionResponse {
            model: "llama3.3".to_string(),
            choices: vec![ChatChoice {
                message: ChatChoiceMessage {
                    content: "An answer".to_string(),
                },
            }],
            usage: Some(ChatUsage {
                prompt_tokens: 120,
                completion_tokens: 40,
            }),
        };

        let converted = client.convert_response(response).unwrap();
        assert_eq!(converted.content, "An answer");
        assert_eq!(converted.usage.total_tokens, 160);
    }
}
