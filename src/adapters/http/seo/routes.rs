//! Axum router configuration for SEO content endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{chat_message, chat_query, debug, generate_content, health, SeoAppState};

/// Create the SEO API router.
///
/// # Routes
///
/// - `POST /api/generate` - Generate content for a prompt
/// - `GET /chat?message=...` - Chat via query string
/// - `POST /chat` - Chat via JSON body
/// - `GET /health` - Liveness and provider flags
/// - `GET /debug` - Provider order and models
pub fn seo_routes() -> Router<SeoAppState> {
    Router::new()
        .route("/api/generate", post(generate_content))
        .route("/chat", get(chat_query).post(chat_message))
        .route("/health", get(health))
        .route("/debug", get(debug))
}

/// Create the complete SEO router with its state applied.
pub fn seo_router(state: SeoAppState) -> Router {
    seo_routes().with_state(state)
}
