use std::fmt;

use quill_types::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Categories of API errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// Non-success HTTP status (4xx, 5xx)
    HttpStatus,
    /// Request timed out
    Timeout,
    /// Connection refused, DNS failure, or other transport failure
    Network,
    /// Body was not valid JSON for the expected shape, or failed validation
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Timeout => write!(f, "timeout"),
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Decode => write!(f, "decode"),
        }
    }
}

/// Structured error from the blog API with kind and details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error.
    ///
    /// The server reports failures as `{"error": "..."}`; when present that
    /// text is folded into the message.
    pub fn http_status(status: u16, body: &str) -> Self {
        let details = (!body.is_empty()).then(|| body.to_string());
        let message = match extract_server_message(body) {
            Some(msg) => format!("HTTP {status}: {msg}"),
            None => format!("HTTP {status}"),
        };
        Self {
            kind: ApiErrorKind::HttpStatus,
            message,
            details,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Timeout, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    /// Creates a decode error for a body that could not be parsed.
    pub fn decode(what: &str, err: &serde_json::Error, body: &str) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: format!("Invalid {what} payload: {err}"),
            details: Some(body.to_string()),
        }
    }

    /// Creates a decode error for a body that parsed but failed validation.
    pub fn invalid(what: &str, err: &ValidationError) -> Self {
        Self::new(ApiErrorKind::Decode, format!("Invalid {what} payload: {err}"))
    }

    /// Classifies a transport error.
    pub fn from_reqwest(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::timeout(format!("Request timed out: {e}"))
        } else if e.is_connect() {
            Self::network(format!("Connection failed: {e}"))
        } else {
            Self::network(format!("Network error: {e}"))
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::HttpStatus && self.message.starts_with("HTTP 404")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Accepts `{"error": "..."}`, `{"error": {"message": "..."}}` and
/// `{"message": "..."}`.
fn extract_server_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    let msg = match json.get("error") {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(obj) => obj.get("message").and_then(Value::as_str),
        None => json.get("message").and_then(Value::as_str),
    }?;
    let msg = msg.trim();
    (!msg.is_empty()).then(|| msg.to_string())
}
