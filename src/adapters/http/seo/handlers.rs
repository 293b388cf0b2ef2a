//! HTTP handlers for SEO content endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::application::{
    GenerateContentCommand, GenerateContentError, GenerateContentHandler, GetServiceStatusHandler,
};

use super::dto::{
    ChatRequest, ChatResponse, DebugResponse, GenerateRequest, GenerateResponse, HealthResponse,
};

/// Application state for SEO endpoints.
#[derive(Clone)]
pub struct SeoAppState {
    pub generate_handler: Arc<GenerateContentHandler>,
    pub status_handler: Arc<GetServiceStatusHandler>,
}

impl SeoAppState {
    pub fn new(
        generate_handler: Arc<GenerateContentHandler>,
        status_handler: Arc<GetServiceStatusHandler>,
    ) -> Self {
        Self {
            generate_handler,
            status_handler,
        }
    }
}

/// Generate SEO content.
///
/// POST /api/generate
///
/// An empty prompt is a logical failure (200, `success: false`); a body that
/// is not a JSON object with a `prompt` string is a 400.
pub async fn generate_content(
    State(state): State<SeoAppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> (StatusCode, Json<GenerateResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected generate request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(GenerateResponse::error(rejection.body_text())),
            );
        }
    };

    match state
        .generate_handler
        .handle(GenerateContentCommand::new(request.prompt))
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result.into())),
        Err(err) => (StatusCode::OK, Json(GenerateResponse::error(err.to_string()))),
    }
}

/// Chat with a JSON body.
///
/// POST /chat
pub async fn chat_message(
    State(state): State<SeoAppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> (StatusCode, Json<ChatResponse>) {
    match payload {
        Ok(Json(request)) => (StatusCode::OK, Json(chat(&state, request).await)),
        Err(rejection) => (
            StatusCode::BAD_REQUEST,
            Json(ChatResponse::error(rejection.body_text())),
        ),
    }
}

/// Chat with a query string.
///
/// GET /chat?message=...
pub async fn chat_query(
    State(state): State<SeoAppState>,
    query: Result<Query<ChatRequest>, QueryRejection>,
) -> (StatusCode, Json<ChatResponse>) {
    match query {
        Ok(Query(request)) => (StatusCode::OK, Json(chat(&state, request).await)),
        Err(rejection) => (
            StatusCode::BAD_REQUEST,
            Json(ChatResponse::error(rejection.body_text())),
        ),
    }
}

async fn chat(state: &SeoAppState, request: ChatRequest) -> ChatResponse {
    match state
        .generate_handler
        .handle(GenerateContentCommand::new(request.message))
        .await
    {
        Ok(result) => ChatResponse::success(result.content),
        Err(GenerateContentError::EmptyPrompt) => ChatResponse::error("No message provided"),
    }
}

/// Liveness plus provider configuration flags.
///
/// GET /health
pub async fn health(State(state): State<SeoAppState>) -> Json<HealthResponse> {
    Json(state.status_handler.handle().into())
}

/// Provider configuration details, without secrets.
///
/// GET /debug
pub async fn debug(State(state): State<SeoAppState>) -> Json<DebugResponse> {
    Json(state.status_handler.handle().into())
}
