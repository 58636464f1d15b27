//! LLM integration crate for paperchat.
//!
//! This crate provides a provider-agnostic abstraction for interacting with
//! Large Language Models (LLMs) through a unified trait-based interface.
//!
//! # Providers
//! - **Hugging Face router**: OpenAI-compatible chat completions (default)
//! - **openai-compatible**: any server speaking the same wire format
//!
//! # Example
//! ```no_run
//! use paperchat_llm::{LlmClient, LlmRequest, providers::HuggingFaceClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HuggingFaceClient::new("hf_...");
//! let request = LlmRequest::new("Hello, world!", "meta-llama/Llama-3.3-70B-Instruct");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::HuggingFaceClient;
