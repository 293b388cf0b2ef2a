//! GenerateContentHandler - Command handler for SEO content generation.
//!
//! Resolution order for a prompt:
//!
//! 1. Canned answer (phrase match, no provider call)
//! 2. Local long-form template for high-confidence intents (no provider call)
//! 3. The AI provider (normally a [`FallbackChain`](crate::adapters::ai::FallbackChain))
//! 4. Template fallback for the classified intent
//!
//! Only an empty prompt is an error; every other request produces text.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::seo::{
    local_answer, render_for_prompt, CannedAnswers, IntentClassifier, IntentTag,
    KeywordClassifier,
};
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole, ProviderFailure};

const DEFAULT_SYSTEM_PROMPT: &str = "You are AuraSEO, an expert SEO copywriter. \
Write clear, well-structured, search-optimized content in markdown. \
Be specific to the business or topic in the request.";

/// Command to generate content for a prompt.
#[derive(Debug, Clone)]
pub struct GenerateContentCommand {
    pub prompt: String,
}

impl GenerateContentCommand {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Where the returned content came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentSource {
    /// Pre-written answer for a known question.
    Canned,
    /// Long-form template answered without contacting a provider.
    LocalTemplate { intent: IntentTag },
    /// Generated by a remote provider.
    Provider { provider: String, model: String },
    /// Template used after every provider failed or none was configured.
    TemplateFallback { intent: IntentTag },
}

impl ContentSource {
    /// Short label reported to API clients.
    pub fn engine_label(&self) -> String {
        match self {
            Self::Canned => "canned".to_string(),
            Self::LocalTemplate { intent } => format!("local_template:{}", intent),
            Self::Provider { provider, model } => format!("{}:{}", provider, model),
            Self::TemplateFallback { intent } => format!("template_fallback:{}", intent),
        }
    }

    /// True when a remote provider produced the content.
    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider { .. })
    }
}

/// Result of successful generation.
#[derive(Debug, Clone)]
pub struct GenerateContentResult {
    pub content: String,
    pub source: ContentSource,
    /// Provider attempts that failed before the content was produced.
    pub failures: Vec<ProviderFailure>,
    pub request_id: String,
}

/// Errors reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateContentError {
    #[error("No prompt provided")]
    EmptyPrompt,
}

/// Handler for content generation.
pub struct GenerateContentHandler {
    provider: Arc<dyn AIProvider>,
    classifier: Arc<dyn IntentClassifier>,
    canned: CannedAnswers,
    system_prompt: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl GenerateContentHandler {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            classifier: Arc::new(KeywordClassifier),
            canned: CannedAnswers::default(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_canned_answers(mut self, canned: CannedAnswers) -> Self {
        self.canned = canned;
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub async fn handle(
        &self,
        cmd: GenerateContentCommand,
    ) -> Result<GenerateContentResult, GenerateContentError> {
        let prompt = cmd.prompt.trim();
        if prompt.is_empty() {
            return Err(GenerateContentError::EmptyPrompt);
        }

        let request_id = Uuid::new_v4().to_string();

        // 1. Canned answers short-circuit everything
        if let Some(canned) = self.canned.lookup(prompt) {
            tracing::info!(request_id = %request_id, phrase = canned.phrase, "Serving canned answer");
            return Ok(GenerateContentResult {
                content: canned.answer.to_string(),
                source: ContentSource::Canned,
                failures: Vec::new(),
                request_id,
            });
        }

        // 2. High-confidence intents are answered locally
        let intents = self.classifier.classify(prompt);
        if let Some((intent, content)) = local_answer(&intents, prompt) {
            tracing::info!(request_id = %request_id, intent = %intent, "Serving local template");
            return Ok(GenerateContentResult {
                content,
                source: ContentSource::LocalTemplate { intent },
                failures: Vec::new(),
                request_id,
            });
        }

        // 3. Remote providers
        let request = self.completion_request(prompt, &request_id);
        let failures = match self.provider.complete(request).await {
            Ok(response) => {
                return Ok(GenerateContentResult {
                    content: response.content,
                    source: ContentSource::Provider {
                        provider: response.provider,
                        model: response.model,
                    },
                    failures: Vec::new(),
                    request_id,
                });
            }
            Err(AIError::Exhausted { failures }) => failures,
            Err(AIError::NoProviderConfigured) => Vec::new(),
            Err(err) => vec![ProviderFailure::from_error(&self.provider.provider_info(), &err)],
        };

        // 4. Template fallback always succeeds
        let (intent, content) = render_for_prompt(&intents, prompt);
        tracing::info!(
            request_id = %request_id,
            intent = %intent,
            failed_attempts = failures.len(),
            "Serving template fallback"
        );

        Ok(GenerateContentResult {
            content,
            source: ContentSource::TemplateFallback { intent },
            failures,
            request_id,
        })
    }

    fn completion_request(&self, prompt: &str, request_id: &str) -> CompletionRequest {
        let mut request = CompletionRequest::new(request_id)
            .with_system_prompt(&self.system_prompt)
            .with_message(MessageRole::User, prompt);
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        request
    }
}
