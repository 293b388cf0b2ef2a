//! Scripted provider for chain and handler tests.
//!
//! Each call pops the next scripted outcome; once the script runs dry every
//! call succeeds with a stock answer long enough to pass the length guard.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

const STOCK_ANSWER: &str = "Mock response with enough text to be accepted.";

/// Provider whose outcomes are queued up front.
///
/// Clones share the script and the call log, so a test can hand one clone
/// to the chain and inspect the other.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    script: Arc<Mutex<VecDeque<Result<String, MockError>>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    info: ProviderInfo,
    delay: Duration,
}

/// Failures a scripted provider can report.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    ModelLoading { estimated_secs: Option<u32> },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Parse { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::ModelLoading { estimated_secs } => AIError::model_loading(estimated_secs),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Parse { message } => AIError::parse(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            script: Arc::default(),
            calls: Arc::default(),
            info: ProviderInfo::new("mock", "mock-model-1", Duration::from_secs(5)),
            delay: Duration::ZERO,
        }
    }

    /// Queues a successful completion.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.enqueue(Ok(content.into()))
    }

    /// Queues a failure.
    pub fn with_error(self, error: MockError) -> Self {
        self.enqueue(Err(error))
    }

    /// Sleeps this long before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn enqueue(self, outcome: Result<String, MockError>) -> Self {
        self.script.lock().unwrap().push_back(outcome);
        self
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let outcome = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(STOCK_ANSWER.to_string()));

        outcome
            .map(|content| CompletionResponse::new(content, &self.info.name, &self.info.model))
            .map_err(AIError::from)
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
