//! API Handlers
//!
//! HTTP request handlers for each clipboard server endpoint.

use std::error::Error as StdError;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use http_body_util::LengthLimitError;
use tracing::warn;

use crate::clipboard::{format_ttl, ClipboardService};
use crate::config::Config;
use crate::error::{ClipboardError, Result};
use crate::models::{ContentResponse, CreateResponse, HealthResponse, IndexResponse};
use crate::store::ClipboardStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clipboard operations over the shared store
    pub clipboard: ClipboardService,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(clipboard: ClipboardService) -> Self {
        Self { clipboard }
    }

    /// Creates a new AppState from a store handle and configuration.
    pub fn from_config(store: Arc<dyn ClipboardStore>, config: &Config) -> Self {
        Self::new(ClipboardService::from_config(store, config))
    }
}

/// Handler for GET /
///
/// Describes the API and its limits.
pub async fn index_handler(State(state): State<AppState>) -> Json<IndexResponse> {
    let expires_in = format_ttl(state.clipboard.ttl().as_secs());
    Json(IndexResponse::new(
        state.clipboard.max_content_size(),
        &expires_in,
    ))
}

/// Handler for POST /
///
/// Stores the raw request body under a new clipboard id. The body is read
/// with the content ceiling as its limit, so oversized uploads are cut off
/// without buffering them fully.
pub async fn create_handler(
    State(state): State<AppState>,
    body: Body,
) -> Result<Json<CreateResponse>> {
    let limit = state.clipboard.max_content_size();
    let bytes = axum::body::to_bytes(body, limit)
        .await
        .map_err(|err| body_read_error(&err, limit))?;

    let created = state.clipboard.create(&bytes).await?;

    Ok(Json(CreateResponse::new(
        created.id,
        format_ttl(created.ttl_seconds),
    )))
}

/// Handler for GET /:id
///
/// Returns the stored content as a JSON string.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentResponse>> {
    let content = state.clipboard.retrieve(&id).await?;
    Ok(Json(ContentResponse::from_bytes(&content)))
}

/// Handler for GET /:id/raw
///
/// Returns the stored bytes verbatim.
pub async fn raw_handler(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let content = state.clipboard.retrieve(&id).await?;
    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        content,
    )
        .into_response())
}

/// Handler for GET /health
///
/// Pings the store; reports 503 when it is unreachable.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store = state.clipboard.store();
    match store.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::healthy(store.backend()))),
        Err(err) => {
            warn!("Health check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::degraded(store.backend())),
            )
        }
    }
}

fn body_read_error(err: &axum::Error, limit: usize) -> ClipboardError {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(current) = source {
        if current.is::<LengthLimitError>() {
            return ClipboardError::PayloadTooLarge { limit };
        }
        source = current.source();
    }
    ClipboardError::InvalidRequest(format!("failed to read request body: {}", err))
}
