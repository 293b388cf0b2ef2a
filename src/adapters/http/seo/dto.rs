//! Data transfer objects for SEO content HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{GenerateContentResult, ServiceStatus};

/// Label attached to every successful generation response.
pub const CONTENT_MESSAGE: &str = "AuraSEO AI Professional Content";

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to generate content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Free-text prompt
    pub prompt: String,
}

/// Chat message, as JSON body or query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Response of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Which engine produced the content (e.g. `openai:gpt-3.5-turbo`)
    #[serde(rename = "engineUsed", skip_serializing_if = "Option::is_none")]
    pub engine_used: Option<String>,
}

impl GenerateResponse {
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
            message: None,
            engine_used: None,
        }
    }
}

impl From<GenerateContentResult> for GenerateResponse {
    fn from(result: GenerateContentResult) -> Self {
        Self {
            success: true,
            result: Some(result.content),
            error: None,
            message: Some(CONTENT_MESSAGE.to_string()),
            engine_used: Some(result.source.engine_label()),
        }
    }
}

/// Response of the chat endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    /// `success` or `error`
    pub status: String,
}

impl ChatResponse {
    pub fn success(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            status: "success".to_string(),
        }
    }

    pub fn error(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            status: "error".to_string(),
        }
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub openai_configured: bool,
    pub anthropic_configured: bool,
    pub huggingface_configured: bool,
    pub message: String,
}

impl From<ServiceStatus> for HealthResponse {
    fn from(status: ServiceStatus) -> Self {
        let message = if status.any_provider_configured() {
            "AuraSEO is running with AI providers"
        } else {
            "AuraSEO is running in template mode (no AI provider configured)"
        };

        Self {
            status: "healthy".to_string(),
            openai_configured: status.openai_configured,
            anthropic_configured: status.anthropic_configured,
            huggingface_configured: status.huggingface_configured,
            message: message.to_string(),
        }
    }
}

/// Response of `GET /debug`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugResponse {
    pub server_status: String,
    pub openai_configured: bool,
    pub anthropic_configured: bool,
    pub huggingface_configured: bool,
    pub huggingface_models: Vec<String>,
    pub provider_order: Vec<String>,
    pub message: String,
}

impl From<ServiceStatus> for DebugResponse {
    fn from(status: ServiceStatus) -> Self {
        let message = format!(
            "{} provider candidate(s), template fallback always available",
            status.provider_order.len()
        );

        Self {
            server_status: "running".to_string(),
            openai_configured: status.openai_configured,
            anthropic_configured: status.anthropic_configured,
            huggingface_configured: status.huggingface_configured,
            huggingface_models: status.huggingface_models,
            provider_order: status.provider_order,
            message,
        }
    }
}
