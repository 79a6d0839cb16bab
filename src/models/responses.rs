//! Response DTOs for the clipboard server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the index endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct IndexResponse {
    /// Greeting
    pub message: String,
    /// Usage summary
    pub info: String,
}

impl IndexResponse {
    /// Creates the index response describing the configured limits
    pub fn new(max_content_size: usize, expires_in: &str) -> Self {
        Self {
            message: "Fast Clipboard API".to_string(),
            info: format!(
                "POST content to / to get a clipboard_id, then GET /{{clipboard_id}}. \
                 Max size {} bytes, entries expire after {}.",
                max_content_size, expires_in
            ),
        }
    }
}

/// Response body for the create operation (POST /)
#[derive(Debug, Clone, Serialize)]
pub struct CreateResponse {
    /// Success message
    pub message: String,
    /// Identifier of the new entry
    pub clipboard_id: String,
    /// Human-readable lifetime, e.g. "24 hours"
    pub expires_in: String,
}

impl CreateResponse {
    /// Creates a new CreateResponse
    pub fn new(clipboard_id: impl Into<String>, expires_in: impl Into<String>) -> Self {
        Self {
            message: "Content saved successfully".to_string(),
            clipboard_id: clipboard_id.into(),
            expires_in: expires_in.into(),
        }
    }
}

/// Response body for the retrieve operation (GET /:id)
#[derive(Debug, Clone, Serialize)]
pub struct ContentResponse {
    /// Stored content; invalid UTF-8 sequences are replaced
    pub content: String,
}

impl ContentResponse {
    /// Creates a ContentResponse from stored bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            content: String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Store backend name
    pub store: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Store reachable
    pub fn healthy(store: &str) -> Self {
        Self::with_status("healthy", store)
    }

    /// Store unreachable
    pub fn degraded(store: &str) -> Self {
        Self::with_status("degraded", store)
    }

    fn with_status(status: &str, store: &str) -> Self {
        Self {
            status: status.to_string(),
            store: store.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_response_serialize() {
        let resp = CreateResponse::new("0123456789abcdef", "24 hours");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["clipboard_id"], "0123456789abcdef");
        assert_eq!(json["expires_in"], "24 hours");
        assert!(json["message"].as_str().unwrap().contains("successfully"));
    }

    #[test]
    fn test_content_response_text() {
        let resp = ContentResponse::from_bytes(b"hello");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"content":"hello"}"#);
    }

    #[test]
    fn test_content_response_lossy_binary() {
        let resp = ContentResponse::from_bytes(&[b'a', 0xff, b'b']);
        assert_eq!(resp.content, "a\u{fffd}b");
    }

    #[test]
    fn test_index_response_mentions_limits() {
        let resp = IndexResponse::new(10_485_760, "24 hours");
        assert!(resp.info.contains("10485760"));
        assert!(resp.info.contains("24 hours"));
        assert!(resp.info.contains("/{clipboard_id}"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::degraded("redis");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("degraded"));
        assert!(json.contains("redis"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
