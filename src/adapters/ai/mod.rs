//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for various LLM providers.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAIProvider` - OpenAI chat models
//! - `AnthropicProvider` - Anthropic Claude models
//! - `HuggingFaceProvider` - One hosted Hugging Face inference model
//! - `FallbackChain` - Ordered fallback over any of the above

mod anthropic_provider;
mod fallback_chain;
mod huggingface_provider;
mod mock_provider;
mod openai_provider;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider};
pub use fallback_chain::FallbackChain;
pub use huggingface_provider::{HuggingFaceConfig, HuggingFaceProvider};
pub use mock_provider::{MockAIProvider, MockError};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
