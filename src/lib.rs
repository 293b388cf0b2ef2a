//! AuraSEO - SEO content generation service
//!
//! This crate answers free-text prompts with SEO content, trying a chain of
//! remote LLM providers and falling back to deterministic templates so that
//! every request gets text back.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
