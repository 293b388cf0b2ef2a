//! AuraSEO server entry point.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use aura_seo::adapters::{app_router, FallbackChain, SeoAppState};
use aura_seo::application::{GenerateContentHandler, GetServiceStatusHandler};
use aura_seo::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let chain = FallbackChain::from_config(&config.ai);
    tracing::info!(
        providers = ?config.ai.provider_order(),
        environment = ?config.server.environment,
        "Provider fallback chain configured"
    );
    if chain.is_empty() {
        tracing::warn!("No AI provider configured, serving template content only");
    }

    let generate_handler = GenerateContentHandler::new(Arc::new(chain))
        .with_max_tokens(config.ai.max_tokens)
        .with_temperature(config.ai.temperature);
    let state = SeoAppState::new(
        Arc::new(generate_handler),
        Arc::new(GetServiceStatusHandler::new(&config.ai)),
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "AuraSEO listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` overrides
/// the configured filter.
fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
