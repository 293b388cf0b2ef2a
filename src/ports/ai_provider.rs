//! AI Provider Port - Interface for remote text-generation backends.
//!
//! This port abstracts all interactions with LLM providers (OpenAI, Anthropic,
//! Hugging Face inference, ...), so the generation pipeline can try them in
//! order without knowing any provider's wire format.
//!
//! # Design
//!
//! - Non-streaming completions only
//! - Provider-agnostic message format
//! - Every provider reports the timeout it must be held to
//! - Error taxonomy distinguishes transient (retry once), retryable and
//!   permanent failures
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoProvider;
//!
//! #[async_trait]
//! impl AIProvider for EchoProvider {
//!     async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
//!         Ok(CompletionResponse::new(request.user_prompt(), "echo", "echo-1"))
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("echo", "echo-1", Duration::from_secs(1))
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Port for remote text generation.
///
/// Implementations translate between a provider-specific HTTP API and these
/// types. They make exactly one request per `complete` call; retry policy
/// belongs to the caller.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Generate a single completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Get provider information (name, model, call timeout).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for AI completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Conversation messages; the last user message is the prompt.
    pub messages: Vec<Message>,
    /// System prompt to guide model behavior.
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Temperature for response randomness (0.0 = deterministic, 1.0+ = creative).
    pub temperature: Option<f32>,
    /// Correlation ID for log lines across the fallback chain.
    pub request_id: String,
}

impl CompletionRequest {
    /// Creates a new, empty completion request.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: None,
            max_tokens: None,
            temperature: None,
            request_id: request_id.into(),
        }
    }

    /// Adds a message to the conversation.
    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(Message::new(role, content));
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Content of the last user message, or empty if there is none.
    pub fn user_prompt(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
            .unwrap_or("")
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent this message.
    pub role: MessageRole,
    /// Message content.
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Role of the message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions (guides model behavior).
    System,
    /// User input.
    User,
    /// Assistant (model) response.
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// Response from AI completion, normalized to plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    /// Generated content.
    pub content: String,
    /// Provider that generated the response.
    pub provider: String,
    /// Model that generated the response.
    pub model: String,
    /// Why the model stopped generating.
    pub finish_reason: FinishReason,
}

impl CompletionResponse {
    /// Creates a response that stopped naturally.
    pub fn new(
        content: impl Into<String>,
        provider: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            provider: provider.into(),
            model: model.into(),
            finish_reason: FinishReason::Stop,
        }
    }

    /// Sets the finish reason.
    pub fn with_finish_reason(mut self, finish_reason: FinishReason) -> Self {
        self.finish_reason = finish_reason;
        self
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop (end of response).
    Stop,
    /// Hit max_tokens limit.
    Length,
    /// Content was filtered for safety.
    ContentFilter,
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "openai", "huggingface").
    pub name: String,
    /// Model identifier (e.g., "gpt-3.5-turbo").
    pub model: String,
    /// Upper bound for a single call.
    pub timeout: Duration,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            timeout,
        }
    }
}

/// A failed attempt against one provider candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderFailure {
    pub provider: String,
    pub model: String,
    pub reason: String,
    /// Whether the failure class is expected to clear up on its own.
    pub retryable: bool,
}

impl ProviderFailure {
    /// Records `error` as the outcome of calling the provider described by `info`.
    pub fn from_error(info: &ProviderInfo, error: &AIError) -> Self {
        Self {
            provider: info.name.clone(),
            model: info.model.clone(),
            reason: error.to_string(),
            retryable: error.is_retryable(),
        }
    }
}

/// AI provider errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AIError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Model is still being loaded on the provider side.
    #[error("model loading (estimated {estimated_secs:?}s)")]
    ModelLoading {
        /// Provider's estimate of the remaining warm-up time.
        estimated_secs: Option<u32>,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Provider answered but the generated text is unusable.
    #[error("response too short: {chars} chars, need at least {min}")]
    ResponseTooShort {
        /// Characters received.
        chars: usize,
        /// Minimum accepted.
        min: usize,
    },

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// No provider credential is configured.
    #[error("no AI provider configured")]
    NoProviderConfigured,

    /// Every configured provider failed.
    #[error("all {} provider candidates failed", .failures.len())]
    Exhausted {
        /// One entry per candidate, in attempt order.
        failures: Vec<ProviderFailure>,
    },
}

impl AIError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates a model loading error.
    pub fn model_loading(estimated_secs: Option<u32>) -> Self {
        Self::ModelLoading { estimated_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(timeout: Duration) -> Self {
        Self::Timeout {
            timeout_secs: timeout.as_secs() as u32,
        }
    }

    /// Returns true if this error is retryable at all.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AIError::RateLimited { .. }
                | AIError::ModelLoading { .. }
                | AIError::Unavailable { .. }
                | AIError::Network(_)
                | AIError::Timeout { .. }
        )
    }

    /// Returns true if an immediate retry of the same call is expected to work.
    ///
    /// Only model warm-up qualifies; it gets exactly one retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AIError::ModelLoading { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_request_builder_works() {
        let request = CompletionRequest::new("req-1")
            .with_message(MessageRole::User, "Hello")
            .with_system_prompt("Be helpful")
            .with_max_tokens(100)
            .with_temperature(0.7);

        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.system_prompt, Some("Be helpful".to_string()));
        assert_eq!(request.max_tokens, Some(100));
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.request_id, "req-1");
    }

    #[test]
    fn user_prompt_is_last_user_message() {
        let request = CompletionRequest::new("req-1")
            .with_message(MessageRole::User, "first")
            .with_message(MessageRole::Assistant, "reply")
            .with_message(MessageRole::User, "second");

        assert_eq!(request.user_prompt(), "second");
        assert_eq!(CompletionRequest::new("req-2").user_prompt(), "");
    }

    #[test]
    fn with_message_keeps_role_and_content() {
        let request = CompletionRequest::new("req-3").with_message(MessageRole::Assistant, "Hi there");

        assert_eq!(request.messages, vec![Message::new(MessageRole::Assistant, "Hi there")]);
        assert_eq!(MessageRole::System.as_str(), "system");
    }

    #[test]
    fn only_model_loading_is_transient() {
        assert!(AIError::model_loading(Some(20)).is_transient());
        assert!(!AIError::unavailable("down").is_transient());
        assert!(!AIError::rate_limited(30).is_transient());
        assert!(!AIError::AuthenticationFailed.is_transient());
    }

    #[test]
    fn retryable_classification() {
        assert!(AIError::rate_limited(30).is_retryable());
        assert!(AIError::network("reset").is_retryable());
        assert!(AIError::timeout(Duration::from_secs(30)).is_retryable());
        assert!(!AIError::AuthenticationFailed.is_retryable());
        assert!(!AIError::parse("bad json").is_retryable());
        assert!(!AIError::ResponseTooShort { chars: 3, min: 20 }.is_retryable());
    }

    #[test]
    fn provider_failure_records_error() {
        let info = ProviderInfo::new("openai", "gpt-3.5-turbo", Duration::from_secs(30));
        let failure = ProviderFailure::from_error(&info, &AIError::rate_limited(10));

        assert_eq!(failure.provider, "openai");
        assert_eq!(failure.model, "gpt-3.5-turbo");
        assert_eq!(failure.reason, "rate limited: retry after 10s");
        assert!(failure.retryable);
    }

    #[test]
    fn exhausted_error_counts_failures() {
        let info = ProviderInfo::new("mock", "m", Duration::from_secs(1));
        let err = AIError::Exhausted {
            failures: vec![
                ProviderFailure::from_error(&info, &AIError::AuthenticationFailed),
                ProviderFailure::from_error(&info, &AIError::network("reset")),
            ],
        };
        assert_eq!(err.to_string(), "all 2 provider candidates failed");
    }
}
