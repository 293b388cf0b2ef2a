//! SEO content command and query handlers.

mod generate_content;
mod get_service_status;

pub use generate_content::{
    ContentSource, GenerateContentCommand, GenerateContentError, GenerateContentHandler,
    GenerateContentResult,
};
pub use get_service_status::{GetServiceStatusHandler, ServiceStatus};
