//! LLM provider factory.
//!
//! This module provides a factory for creating LLM clients based on
//! application configuration. It handles provider resolution and
//! credential injection.

use crate::client::LlmClient;
use crate::providers::HuggingFaceClient;
use std::sync::Arc;

/// Create an LLM client based on the provider name.
///
/// # Arguments
/// * `provider` - Provider identifier ("huggingface", "openai-compatible")
/// * `endpoint` - Optional custom endpoint URL
/// * `api_key` - Optional API key (required for the Hugging Face router)
///
/// # Returns
/// A shared trait object implementing `LlmClient`
///
/// # Errors
/// Returns error if the provider is unknown or required credentials are
/// missing.
pub fn create_client(
    provider: &str,
    endpoint: Option<&str>,
    api_key: Option<&str>,
) -> Result<Arc<dyn LlmClient>, String> {
    match provider.to_lowercase().as_str() {
        "huggingface" | "hf" => {
            let api_key = api_key
                .ok_or_else(|| "Hugging Face provider requires an API key".to_string())?;
            let client = match endpoint {
                Some(endpoint) => {
                    HuggingFaceClient::with_base_url(endpoint, Some(api_key.to_string()))
                }
                None => HuggingFaceClient::new(api_key),
            };
            Ok(Arc::new(client))
        }
        "openai-compatible" => {
            let endpoint = endpoint
                .ok_or_else(|| "openai-compatible provider requires an endpoint".to_string())?;
            let client =
                HuggingFaceClient::with_base_url(endpoint, api_key.map(str::to_string));
            Ok(Arc::new(client))
        }
        _ => Err(format!("Unknown provider: {}", provider)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_huggingface_client() {
        let client = create_client("huggingface", None, Some("hf_test"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_huggingface_requires_api_key() {
        match create_client("huggingface", None, None) {
            Err(err) => assert!(err.contains("requires an API key")),
            Ok(_) => panic!("Expected error for Hugging Face without API key"),
        }
    }

    #[test]
    fn test_openai_compatible_requires_endpoint() {
        match create_client("openai-compatible", None, None) {
            Err(err) => assert!(err.contains("requires an endpoint")),
            Ok(_) => panic!("Expected error for openai-compatible without endpoint"),
        }
    }

    #[test]
    fn test_openai_compatible_without_key() {
        let client = create_client("openai-compatible", Some("http://localhost:8080/v1"), None);
        assert!(client.is_ok());
    }

    #[test]
    fn test_unknown_provider() {
        match create_client("unknown", None, None) {
            Err(err) => assert!(err.contains("Unknown provider")),
            Ok(_) => panic!("Expected error for unknown provider"),
        }
    }
}
