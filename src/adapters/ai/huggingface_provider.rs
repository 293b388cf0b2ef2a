//! Hugging Face Provider - Implementation of AIProvider for the hosted
//! Inference API.
//!
//! One provider instance talks to exactly one model. The fallback chain gets
//! one candidate per configured model, so each model is tried (and retried on
//! warm-up) independently.
//!
//! The API answers in several shapes that all have to be normalized:
//!
//! - `[{"generated_text": "..."}]` (text-generation pipelines)
//! - `{"generated_text": "..."}` (some text2text pipelines)
//! - `{"error": "...", "estimated_time": 20.0}` (errors, cold models)

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

/// Configuration for one Hugging Face model.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// API token for authentication.
    api_key: Secret<String>,
    /// Model repository id (e.g., "mistralai/Mistral-7B-Instruct-v0.2").
    pub model: String,
    /// Base URL for the API (default: https://api-inference.huggingface.co).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HuggingFaceConfig {
    /// Creates a new configuration for `model`.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: model.into(),
            base_url: "https://api-inference.huggingface.co".to_string(),
            timeout: Duration::from_secs(45),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Hugging Face Inference API provider implementation.
pub struct HuggingFaceProvider {
    config: HuggingFaceConfig,
    client: Client,
}

impl HuggingFaceProvider {
    /// Creates a new provider with its own HTTP client.
    pub fn new(config: HuggingFaceConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(config, client)
    }

    /// Creates a provider sharing an existing HTTP client.
    pub fn with_client(config: HuggingFaceConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Builds the model inference URL.
    fn model_url(&self) -> String {
        format!("{}/models/{}", self.config.base_url, self.config.model)
    }

    /// Flattens the request into a single text prompt.
    fn to_inference_request(request: &CompletionRequest) -> InferenceRequest {
        let prompt = request.user_prompt();
        let inputs = match request.system_prompt {
            Some(ref system) => format!("{}\n\n{}", system, prompt),
            None => prompt.to_string(),
        };

        InferenceRequest {
            inputs,
            parameters: InferenceParameters {
                max_new_tokens: request.max_tokens,
                temperature: request.temperature,
                return_full_text: false,
            },
        }
    }

    /// Sends a request.
    async fn send_request(&self, body: &InferenceRequest) -> Result<Response, AIError> {
        self.client
            .post(self.model_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::timeout(self.config.timeout)
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Maps an error payload to an error, recognizing model warm-up.
    fn error_from_payload(error: InferenceError) -> AIError {
        let message = error.error.message();
        if message.to_lowercase().contains("loading") {
            AIError::model_loading(error.estimated_time.map(|secs| secs.ceil() as u32))
        } else {
            AIError::unavailable(message)
        }
    }

    /// Parses the API response status and body.
    async fn parse_response(
        &self,
        response: Response,
        inputs: &str,
    ) -> Result<CompletionResponse, AIError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AIError::network(format!("Failed to read response: {}", e)))?;

        match status.as_u16() {
            200..=299 => {}
            401 | 403 => return Err(AIError::AuthenticationFailed),
            429 => return Err(AIError::rate_limited(30)),
            _ => {
                return Err(match serde_json::from_str::<InferenceError>(&body) {
                    Ok(payload) => Self::error_from_payload(payload),
                    Err(_) if status.is_server_error() => {
                        AIError::unavailable(format!("Server error {}: {}", status, body))
                    }
                    Err(_) => AIError::network(format!("Unexpected status {}: {}", status, body)),
                });
            }
        }

        let parsed: InferenceResponse = serde_json::from_str(&body)
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        let content = Self::normalize(parsed, inputs)?;
        Ok(CompletionResponse::new(content, "huggingface", &self.config.model))
    }

    /// Extracts the generated text from any of the response shapes.
    fn normalize(response: InferenceResponse, inputs: &str) -> Result<String, AIError> {
        let generated = match response {
            InferenceResponse::Generations(generations) => generations
                .into_iter()
                .next()
                .map(|g| g.generated_text)
                .ok_or_else(|| AIError::parse("Empty generation list"))?,
            InferenceResponse::Single(generation) => generation.generated_text,
            InferenceResponse::Error(error) => return Err(Self::error_from_payload(error)),
        };

        // Some pipelines ignore return_full_text and echo the prompt
        let text = generated
            .strip_prefix(inputs)
            .unwrap_or(&generated)
            .trim()
            .to_string();

        if text.is_empty() {
            return Err(AIError::parse("Empty generated text"));
        }
        Ok(text)
    }
}

#[async_trait]
impl AIProvider for HuggingFaceProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let body = Self::to_inference_request(&request);
        let response = self.send_request(&body).await?;
        self.parse_response(response, &body.inputs).await
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("huggingface", &self.config.model, self.config.timeout)
    }
}

// ----- Inference API Types -----

#[derive(Debug, Serialize)]
struct InferenceRequest {
    inputs: String,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_new_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Generations(Vec<Generation>),
    Single(Generation),
    Error(InferenceError),
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct InferenceError {
    error: ErrorMessage,
    estimated_time: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    Single(String),
    Multiple(Vec<String>),
}

impl ErrorMessage {
    fn message(&self) -> String {
        match self {
            Self::Single(message) => message.clone(),
            Self::Multiple(messages) => messages.join("; "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MessageRole;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

    async fn spawn_fake_inference(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn provider(base_url: &str) -> HuggingFaceProvider {
        HuggingFaceProvider::new(
            HuggingFaceConfig::new("hf_test", MODEL)
                .with_base_url(base_url)
                .with_timeout(Duration::from_secs(5)),
        )
    }

    fn request() -> CompletionRequest {
        CompletionRequest::new("req-1").with_message(MessageRole::User, "slogan for a bakery")
    }

    #[test]
    fn request_flattens_system_prompt() {
        let request = request()
            .with_system_prompt("You are an SEO expert.")
            .with_max_tokens(250);

        let body = serde_json::to_value(HuggingFaceProvider::to_inference_request(&request)).unwrap();

        assert_eq!(body["inputs"], "You are an SEO expert.\n\nslogan for a bakery");
        assert_eq!(body["parameters"]["max_new_tokens"], 250);
        assert_eq!(body["parameters"]["return_full_text"], false);
    }

    #[test]
    fn normalize_list_shape() {
        let parsed: InferenceResponse =
            serde_json::from_str(r#"[{"generated_text":" Baked fresh every morning. "}]"#).unwrap();
        assert_eq!(
            HuggingFaceProvider::normalize(parsed, "prompt").unwrap(),
            "Baked fresh every morning."
        );
    }

    #[test]
    fn normalize_object_shape_strips_echoed_prompt() {
        let parsed: InferenceResponse =
            serde_json::from_str(r#"{"generated_text":"slogan for a bakery: Rise and shine!"}"#)
                .unwrap();
        assert_eq!(
            HuggingFaceProvider::normalize(parsed, "slogan for a bakery").unwrap(),
            ": Rise and shine!"
        );
    }

    #[test]
    fn normalize_error_shapes() {
        let parsed: InferenceResponse = serde_json::from_str(
            r#"{"error":"Model mistralai/x is currently loading","estimated_time":19.4}"#,
        )
        .unwrap();
        assert!(matches!(
            HuggingFaceProvider::normalize(parsed, ""),
            Err(AIError::ModelLoading { estimated_secs: Some(20) })
        ));

        let parsed: InferenceResponse =
            serde_json::from_str(r#"{"error":["Input too long","Try again"]}"#).unwrap();
        match HuggingFaceProvider::normalize(parsed, "") {
            Err(AIError::Unavailable { message }) => {
                assert_eq!(message, "Input too long; Try again")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn normalize_rejects_empty_generation() {
        let parsed: InferenceResponse = serde_json::from_str(r#"[]"#).unwrap();
        assert!(matches!(HuggingFaceProvider::normalize(parsed, ""), Err(AIError::Parse(_))));

        let parsed: InferenceResponse =
            serde_json::from_str(r#"[{"generated_text":"   "}]"#).unwrap();
        assert!(matches!(HuggingFaceProvider::normalize(parsed, ""), Err(AIError::Parse(_))));
    }

    #[tokio::test]
    async fn complete_success_over_http() {
        let router = Router::new().route(
            "/models/*model",
            post(|| async { Json(serde_json::json!([{"generated_text": "Warm bread, warmer smiles."}])) }),
        );
        let base_url = spawn_fake_inference(router).await;

        let response = provider(&base_url).complete(request()).await.unwrap();

        assert_eq!(response.content, "Warm bread, warmer smiles.");
        assert_eq!(response.provider, "huggingface");
        assert_eq!(response.model, MODEL);
    }

    #[tokio::test]
    async fn complete_reports_loading_then_succeeds() {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = Router::new()
            .route(
                "/models/*model",
                post(|State(hits): State<Arc<AtomicUsize>>| async move {
                    if hits.fetch_add(1, Ordering::SeqCst) == 0 {
                        (
                            StatusCode::SERVICE_UNAVAILABLE,
                            Json(serde_json::json!({
                                "error": "Model is currently loading",
                                "estimated_time": 3.0
                            })),
                        )
                    } else {
                        (
                            StatusCode::OK,
                            Json(serde_json::json!([{"generated_text": "Second attempt output"}])),
                        )
                    }
                }),
            )
            .with_state(hits.clone());
        let base_url = spawn_fake_inference(router).await;
        let provider = provider(&base_url);

        let first = provider.complete(request()).await;
        assert!(matches!(first, Err(AIError::ModelLoading { estimated_secs: Some(3) })));

        let second = provider.complete(request()).await.unwrap();
        assert_eq!(second.content, "Second attempt output");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn complete_maps_auth_failure() {
        let router = Router::new().route(
            "/models/*model",
            post(|| async { (StatusCode::UNAUTHORIZED, "invalid token") }),
        );
        let base_url = spawn_fake_inference(router).await;

        let result = provider(&base_url).complete(request()).await;

        assert!(matches!(result, Err(AIError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn complete_maps_connection_refused_to_network() {
        // Port 9 (discard) is not listening on loopback in test environments
        let result = provider("http://127.0.0.1:9").complete(request()).await;

        assert!(matches!(result, Err(AIError::Network(_))));
    }
}
