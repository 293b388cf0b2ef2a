//! Fallback Chain - Ordered list of AI providers tried one after another.
//!
//! The chain itself implements [`AIProvider`], so callers treat "the AI" as a
//! single provider and never see individual provider failures.
//!
//! # Behaviour
//!
//! - Candidates are tried strictly in order; the first usable text wins.
//! - Every call is bounded by the candidate's own timeout.
//! - A model that reports it is still loading gets exactly one retry after
//!   `loading_retry_delay`.
//! - Text shorter than `min_result_chars` (after trimming) is a failure.
//! - When every candidate fails the caller gets [`AIError::Exhausted`] with
//!   one [`ProviderFailure`] per candidate.
//!
//! # Example
//!
//! ```ignore
//! let chain = FallbackChain::new()
//!     .with_candidate(Arc::new(OpenAIProvider::new(openai_config)))
//!     .with_candidate(Arc::new(HuggingFaceProvider::new(hf_config)));
//!
//! let response = chain.complete(request).await?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};

use super::{
    AnthropicConfig, AnthropicProvider, HuggingFaceConfig, HuggingFaceProvider, OpenAIConfig,
    OpenAIProvider,
};
use crate::config::AiConfig;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderFailure, ProviderInfo,
};

/// Ordered AI provider fallback.
pub struct FallbackChain {
    candidates: Vec<Arc<dyn AIProvider>>,
    loading_retry_delay: Duration,
    min_result_chars: usize,
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackChain {
    /// Creates an empty chain with default retry delay and minimum length.
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            loading_retry_delay: Duration::from_secs(10),
            min_result_chars: 20,
        }
    }

    /// Builds the chain from configuration.
    ///
    /// Order is OpenAI, Anthropic, then one candidate per Hugging Face model.
    /// Providers without an API key are left out entirely.
    pub fn from_config(config: &AiConfig) -> Self {
        let mut chain = Self::new()
            .with_loading_retry_delay(config.loading_retry_delay())
            .with_min_result_chars(config.min_result_chars);

        if let Some(key) = config.openai_api_key.as_ref().filter(|k| !k.is_empty()) {
            let openai = OpenAIConfig::new(key.as_str())
                .with_model(&config.openai_model)
                .with_base_url(&config.openai_base_url)
                .with_timeout(config.provider_timeout());
            chain = chain.with_candidate(Arc::new(OpenAIProvider::new(openai)));
        }

        if let Some(key) = config.anthropic_api_key.as_ref().filter(|k| !k.is_empty()) {
            let anthropic = AnthropicConfig::new(key.as_str())
                .with_model(&config.anthropic_model)
                .with_base_url(&config.anthropic_base_url)
                .with_timeout(config.provider_timeout());
            chain = chain.with_candidate(Arc::new(AnthropicProvider::new(anthropic)));
        }

        if let Some(key) = config.huggingface_api_key.as_ref().filter(|k| !k.is_empty()) {
            // All models share one connection pool
            let client = Client::builder()
                .timeout(config.huggingface_timeout())
                .build()
                .expect("Failed to create HTTP client");

            for model in config.huggingface_model_list() {
                let hf = HuggingFaceConfig::new(key.as_str(), model)
                    .with_base_url(&config.huggingface_base_url)
                    .with_timeout(config.huggingface_timeout());
                chain = chain.with_candidate(Arc::new(HuggingFaceProvider::with_client(
                    hf,
                    client.clone(),
                )));
            }
        }

        chain
    }

    /// Appends a candidate to the end of the chain.
    pub fn with_candidate(mut self, candidate: Arc<dyn AIProvider>) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Sets the pause before retrying a loading model.
    pub fn with_loading_retry_delay(mut self, delay: Duration) -> Self {
        self.loading_retry_delay = delay;
        self
    }

    /// Sets the shortest accepted text length.
    pub fn with_min_result_chars(mut self, min: usize) -> Self {
        self.min_result_chars = min;
        self
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True when no provider is configured.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidate descriptions, in attempt order.
    pub fn candidates_info(&self) -> Vec<ProviderInfo> {
        self.candidates.iter().map(|c| c.provider_info()).collect()
    }

    /// One bounded call plus the usable-text check.
    async fn attempt(
        &self,
        candidate: &dyn AIProvider,
        info: &ProviderInfo,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, AIError> {
        let response = timeout(info.timeout, candidate.complete(request))
            .await
            .map_err(|_| AIError::timeout(info.timeout))??;

        let chars = response.content.trim().chars().count();
        if chars < self.min_result_chars {
            return Err(AIError::ResponseTooShort {
                chars,
                min: self.min_result_chars,
            });
        }
        Ok(response)
    }

    /// Tries one candidate, retrying once if the model is still loading.
    async fn try_candidate(
        &self,
        candidate: &dyn AIProvider,
        info: &ProviderInfo,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, AIError> {
        match self.attempt(candidate, info, request.clone()).await {
            Err(err) if err.is_transient() => {
                tracing::info!(
                    request_id = %request.request_id,
                    provider = %info.name,
                    model = %info.model,
                    delay_ms = self.loading_retry_delay.as_millis() as u64,
                    "Model loading, retrying once"
                );
                sleep(self.loading_retry_delay).await;
                self.attempt(candidate, info, request.clone()).await
            }
            other => other,
        }
    }
}

#[async_trait]
impl AIProvider for FallbackChain {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        if self.candidates.is_empty() {
            return Err(AIError::NoProviderConfigured);
        }

        let mut failures = Vec::with_capacity(self.candidates.len());

        for (position, candidate) in self.candidates.iter().enumerate() {
            let info = candidate.provider_info();

            match self.try_candidate(candidate.as_ref(), &info, &request).await {
                Ok(response) => {
                    tracing::info!(
                        request_id = %request.request_id,
                        provider = %info.name,
                        model = %info.model,
                        position,
                        chars = response.content.len(),
                        "Provider produced content"
                    );
                    return Ok(response);
                }
                Err(err) => {
                    tracing::warn!(
                        request_id = %request.request_id,
                        provider = %info.name,
                        model = %info.model,
                        position,
                        error = %err,
                        "Provider failed, trying next candidate"
                    );
                    failures.push(ProviderFailure::from_error(&info, &err));
                }
            }
        }

        Err(AIError::Exhausted { failures })
    }

    fn provider_info(&self) -> ProviderInfo {
        // The chain is bounded by the sum of its candidates, plus one retry each
        let total = self
            .candidates
            .iter()
            .map(|c| c.provider_info().timeout * 2 + self.loading_retry_delay)
            .sum();
        ProviderInfo::new("fallback_chain", format!("{} candidates", self.len()), total)
    }
}
