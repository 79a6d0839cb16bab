//! API Module
//!
//! HTTP handlers and routing for the clipboard REST API.
//!
//! # Endpoints
//! - `GET /` - API description
//! - `POST /` - Create a clipboard entry from the raw body
//! - `GET /:id` - Retrieve an entry as JSON
//! - `GET /:id/raw` - Retrieve an entry's bytes verbatim
//! - `GET /health` - Store health check

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
