//! GetServiceStatusHandler - Query handler for provider configuration status.

use serde::Serialize;

use crate::config::AiConfig;

/// Which providers are configured and in what order they are tried.
///
/// Carries presence flags and model names only, never credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub openai_configured: bool,
    pub anthropic_configured: bool,
    pub huggingface_configured: bool,
    pub huggingface_models: Vec<String>,
    pub provider_order: Vec<String>,
}

impl ServiceStatus {
    /// True when at least one remote provider can be called.
    pub fn any_provider_configured(&self) -> bool {
        self.openai_configured || self.anthropic_configured || self.huggingface_configured
    }
}

/// Handler for the status query.
///
/// Configuration is immutable after startup, so the status is computed once.
pub struct GetServiceStatusHandler {
    status: ServiceStatus,
}

impl GetServiceStatusHandler {
    pub fn new(config: &AiConfig) -> Self {
        let huggingface_models = if config.has_huggingface() {
            config.huggingface_model_list()
        } else {
            Vec::new()
        };

        Self {
            status: ServiceStatus {
                openai_configured: config.has_openai(),
                anthropic_configured: config.has_anthropic(),
                huggingface_configured: config.has_huggingface(),
                huggingface_models,
                provider_order: config.provider_order(),
            },
        }
    }

    pub fn handle(&self) -> ServiceStatus {
        self.status.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_reports_nothing_configured() {
        let status = GetServiceStatusHandler::new(&AiConfig::default()).handle();

        assert!(!status.any_provider_configured());
        assert!(status.huggingface_models.is_empty());
        assert!(status.provider_order.is_empty());
    }

    #[test]
    fn configured_providers_are_reported_without_secrets() {
        let config = AiConfig {
            openai_api_key: Some("sk-super-secret".to_string()),
            huggingface_api_key: Some("hf_super_secret".to_string()),
            huggingface_models: "model/a".to_string(),
            ..Default::default()
        };

        let status = GetServiceStatusHandler::new(&config).handle();

        assert!(status.openai_configured);
        assert!(!status.anthropic_configured);
        assert!(status.huggingface_configured);
        assert_eq!(status.huggingface_models, vec!["model/a"]);
        assert_eq!(status.provider_order, vec!["openai:gpt-3.5-turbo", "huggingface:model/a"]);

        let json = serde_json::to_string(&status).unwrap();
        assert!(!json.contains("secret"));
    }
}
