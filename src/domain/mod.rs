//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `seo` - Intent classification, canned answers and content templates
//!   (pure, no I/O)

pub mod seo;
