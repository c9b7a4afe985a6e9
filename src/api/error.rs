//! Structured errors for the API client.

use std::fmt;

use serde_json::Value;

/// Categories of API client errors for consistent error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// HTTP 401: the stored credential is missing, invalid or expired
    SessionExpired,
    /// Any other non-2xx HTTP status
    HttpStatus,
    /// 2xx response whose body did not match the expected schema
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::SessionExpired => write!(f, "session_expired"),
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Decode => write!(f, "decode"),
        }
    }
}

/// Structured error from the API client with kind and details.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional raw error body from the server
    pub detail: Option<String>,
}

impl ApiError {
    /// Creates a session-expired error (HTTP 401).
    pub fn session_expired() -> Self {
        Self {
            kind: ApiErrorKind::SessionExpired,
            message: "Session expired".to_string(),
            detail: None,
        }
    }

    /// Creates an HTTP status error from a non-OK response body.
    ///
    /// The server reports failures as `{"detail": "..."}`; when that field
    /// is present it becomes the message, otherwise a generic one is used.
    /// An unparsable body never fails, it only degrades the message.
    pub fn http_status(status: u16, body: &str) -> Self {
        if let Ok(json) = serde_json::from_str::<Value>(body)
            && let Some(detail) = json.get("detail").and_then(Value::as_str)
        {
            return Self {
                kind: ApiErrorKind::HttpStatus,
                message: detail.to_string(),
                detail: Some(body.to_string()),
            };
        }

        Self {
            kind: ApiErrorKind::HttpStatus,
            message: format!("HTTP error! status: {status}"),
            detail: if body.is_empty() {
                None
            } else {
                Some(body.to_string())
            },
        }
    }

    /// Creates a decode error for a response that did not match the schema.
    pub fn decode(endpoint: &str, source: impl fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: format!("Unexpected response shape from {endpoint}: {source}"),
            detail: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
