//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AURA_SEO_` prefix and nested values use double underscores as separators.
//!
//! Every value has a default, so an empty environment yields a working
//! (template-only) service.
//!
//! # Example
//!
//! ```no_run
//! use aura_seo::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Conventional provider variables honoured when the prefixed ones are absent.
const UNPREFIXED_KEYS: [(&str, &str); 3] = [
    ("OPENAI_API_KEY", "ai.openai_api_key"),
    ("ANTHROPIC_API_KEY", "ai.anthropic_api_key"),
    ("HUGGINGFACE_API_KEY", "ai.huggingface_api_key"),
];

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (OpenAI/Anthropic/Hugging Face)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds provider keys from `OPENAI_API_KEY`, `ANTHROPIC_API_KEY` and
    ///    `HUGGINGFACE_API_KEY` as lowest-priority defaults
    /// 3. Reads environment variables with `AURA_SEO` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AURA_SEO__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AURA_SEO__AI__HUGGINGFACE_MODELS=a,b` -> `ai.huggingface_models = "a,b"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        for (var, key) in UNPREFIXED_KEYS {
            if let Some(value) = std::env::var(var).ok().filter(|v| !v.is_empty()) {
                builder = builder.set_default(key, value)?;
            }
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("AURA_SEO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const TOUCHED_VARS: [&str; 8] = [
        "OPENAI_API_KEY",
        "ANTHROPIC_API_KEY",
        "HUGGINGFACE_API_KEY",
        "AURA_SEO__AI__OPENAI_API_KEY",
        "AURA_SEO__AI__HUGGINGFACE_MODELS",
        "AURA_SEO__AI__MIN_RESULT_CHARS",
        "AURA_SEO__SERVER__PORT",
        "AURA_SEO__SERVER__ENVIRONMENT",
    ];

    /// Helper to clear environment variables before and after testing
    fn clear_env() {
        for var in TOUCHED_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(!config.ai.has_openai());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_prefixed_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("AURA_SEO__SERVER__PORT", "3000");
        env::set_var("AURA_SEO__AI__HUGGINGFACE_MODELS", "model/a,model/b");
        env::set_var("AURA_SEO__AI__MIN_RESULT_CHARS", "40");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ai.huggingface_model_list(), vec!["model/a", "model/b"]);
        assert_eq!(config.ai.min_result_chars, 40);
    }

    #[test]
    fn test_unprefixed_provider_keys_are_honoured() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ANTHROPIC_API_KEY", "sk-ant-plain");
        env::set_var("HUGGINGFACE_API_KEY", "hf_plain");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.anthropic_api_key.as_deref(), Some("sk-ant-plain"));
        assert!(config.ai.has_huggingface());
        assert!(!config.ai.has_openai());
    }

    #[test]
    fn test_prefixed_key_wins_over_unprefixed() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-plain");
        env::set_var("AURA_SEO__AI__OPENAI_API_KEY", "sk-prefixed");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.openai_api_key.as_deref(), Some("sk-prefixed"));
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("AURA_SEO__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }
}
