//! Error handling for the AgroSmart API client
//!
//! Every failure of a prediction call ends up as an [`ApiError`]. Callers
//! that only want to show something can use [`ApiError::message`]; callers
//! that need to branch have the status code, the parsed error body and the
//! underlying cause.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// API client error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// No response was obtained (DNS, connection refused, timeout, dropped body)
    #[error("Failed to connect to server. Please ensure the backend is running on {base_url}")]
    Transport {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("{message}")]
    Status {
        message: String,
        status: u16,
        /// Parsed error body, `{}` when it was not JSON
        data: Value,
    },

    /// A success response whose body did not match the record. Reported
    /// like a connection failure: no status, the JSON error as source.
    #[error("Failed to connect to server. Please ensure the backend is running on {base_url}")]
    Decode {
        base_url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Build the error for a non-success response.
    ///
    /// The message comes from the body's `message` field, then its `detail`
    /// field, and otherwise reads `HTTP <status>: <reason>`.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let data: Value =
            serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Default::default()));

        let message = body_message(&data).unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )
        });

        ApiError::Status {
            message,
            status: status.as_u16(),
            data,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport { .. } | ApiError::Decode { .. } | ApiError::Configuration(_) => {
                None
            }
        }
    }

    /// Raw error body of a non-success response
    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiError::Status { data, .. } => Some(data),
            _ => None,
        }
    }

    /// True when no usable response came back
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. } | ApiError::Decode { .. })
    }
}

fn body_message(data: &Value) -> Option<String> {
    ["message", "detail"].iter().find_map(|key| {
        data.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Result type alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;
