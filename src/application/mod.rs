//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Generation is a command; provider status is a query.

pub mod handlers;

pub use handlers::{
    ContentSource, GenerateContentCommand, GenerateContentError, GenerateContentHandler,
    GenerateContentResult, GetServiceStatusHandler, ServiceStatus,
};
