//! SEO HTTP adapter - REST API for content generation.
//!
//! Provides endpoints for:
//! - Generating content (`/api/generate`)
//! - Chat-style generation (`/chat`)
//! - Health and provider configuration (`/health`, `/debug`)

pub mod dto;
pub mod handlers;
pub mod routes;

// Export DTOs for external use
pub use dto::*;

// Export handlers state and router
pub use handlers::SeoAppState;
pub use routes::seo_router;
