//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
///
/// A provider takes part in the fallback chain only when its API key is set.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// OpenAI chat model
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// OpenAI API base URL
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// Anthropic API key
    pub anthropic_api_key: Option<String>,

    /// Anthropic model
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,

    /// Anthropic API base URL
    #[serde(default = "default_anthropic_base_url")]
    pub anthropic_base_url: String,

    /// Hugging Face API token
    pub huggingface_api_key: Option<String>,

    /// Hugging Face models, most capable first (comma-separated)
    #[serde(default = "default_huggingface_models")]
    pub huggingface_models: String,

    /// Hugging Face inference base URL
    #[serde(default = "default_huggingface_base_url")]
    pub huggingface_base_url: String,

    /// Per-call timeout for OpenAI and Anthropic, in seconds
    #[serde(default = "default_provider_timeout")]
    pub provider_timeout_secs: u64,

    /// Per-call timeout for Hugging Face, in seconds
    #[serde(default = "default_huggingface_timeout")]
    pub huggingface_timeout_secs: u64,

    /// Pause before retrying a model that is still loading, in milliseconds
    #[serde(default = "default_loading_retry_delay")]
    pub loading_retry_delay_ms: u64,

    /// Shortest generated text that is accepted
    #[serde(default = "default_min_result_chars")]
    pub min_result_chars: usize,

    /// Generation length cap sent to every provider
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature sent to every provider
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl AiConfig {
    /// Timeout for OpenAI and Anthropic calls
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    /// Timeout for Hugging Face calls
    pub fn huggingface_timeout(&self) -> Duration {
        Duration::from_secs(self.huggingface_timeout_secs)
    }

    /// Delay before the single warm-up retry
    pub fn loading_retry_delay(&self) -> Duration {
        Duration::from_millis(self.loading_retry_delay_ms)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Check if Anthropic is configured
    pub fn has_anthropic(&self) -> bool {
        self.anthropic_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Check if Hugging Face is configured
    pub fn has_huggingface(&self) -> bool {
        self.huggingface_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Get Hugging Face models as a vector, in configured order
    pub fn huggingface_model_list(&self) -> Vec<String> {
        self.huggingface_models
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Names of the configured providers, in fallback order
    pub fn provider_order(&self) -> Vec<String> {
        let mut order = Vec::new();
        if self.has_openai() {
            order.push(format!("openai:{}", self.openai_model));
        }
        if self.has_anthropic() {
            order.push(format!("anthropic:{}", self.anthropic_model));
        }
        if self.has_huggingface() {
            order.extend(
                self.huggingface_model_list()
                    .into_iter()
                    .map(|model| format!("huggingface:{}", model)),
            );
        }
        order
    }

    /// Validate AI configuration
    ///
    /// Having no provider at all is valid: generation falls back to templates.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for secs in [self.provider_timeout_secs, self.huggingface_timeout_secs] {
            if secs == 0 || secs > 300 {
                return Err(ValidationError::InvalidTimeout);
            }
        }

        if self.min_result_chars == 0 {
            return Err(ValidationError::InvalidMinResultChars);
        }

        if self.has_huggingface() && self.huggingface_model_list().is_empty() {
            return Err(ValidationError::MissingRequired("AI__HUGGINGFACE_MODELS"));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: default_openai_model(),
            openai_base_url: default_openai_base_url(),
            anthropic_api_key: None,
            anthropic_model: default_anthropic_model(),
            anthropic_base_url: default_anthropic_base_url(),
            huggingface_api_key: None,
            huggingface_models: default_huggingface_models(),
            huggingface_base_url: default_huggingface_base_url(),
            provider_timeout_secs: default_provider_timeout(),
            huggingface_timeout_secs: default_huggingface_timeout(),
            loading_retry_delay_ms: default_loading_retry_delay(),
            min_result_chars: default_min_result_chars(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-haiku-20240307".to_string()
}

fn default_anthropic_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_huggingface_models() -> String {
    "mistralai/Mistral-7B-Instruct-v0.2,HuggingFaceH4/zephyr-7b-beta,google/flan-t5-large"
        .to_string()
}

fn default_huggingface_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_provider_timeout() -> u64 {
    30
}

fn default_huggingface_timeout() -> u64 {
    45
}

fn default_loading_retry_delay() -> u64 {
    10_000
}

fn default_min_result_chars() -> usize {
    20
}

fn default_max_tokens() -> u32 {
    800
}

fn default_temperature() -> f32 {
    0.7
}
