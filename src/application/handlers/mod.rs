//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod seo;

pub use seo::{
    ContentSource, GenerateContentCommand, GenerateContentError, GenerateContentHandler,
    GenerateContentResult, GetServiceStatusHandler, ServiceStatus,
};
