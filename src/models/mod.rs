//! Response models for the clipboard server API
//!
//! DTOs serialized into HTTP response bodies. Create takes a raw body, so
//! there are no request DTOs.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    ContentResponse, CreateResponse, ErrorResponse, HealthResponse, IndexResponse,
};
