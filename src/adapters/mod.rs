//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM provider clients and the fallback chain
//! - `http` - Axum REST endpoints

pub mod ai;
pub mod http;

pub use ai::FallbackChain;
pub use http::{app_router, SeoAppState};
