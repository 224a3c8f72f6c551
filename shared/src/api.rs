//! # API response handling
//!
//! The backend answers every call with JSON. A non-2xx status is a failure
//! whose body may carry a human readable `detail` (FastAPI style) or
//! `message` field; a body that is not JSON is a failure on any status.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The server answered 2xx but the body was not what we expected
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Text the server supplied for this failure, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Error payload shape; `detail` may also be a list of validation errors,
/// in which case it carries no usable text.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        non_empty_text(self.detail).or_else(|| non_empty_text(self.message))
    }
}

fn non_empty_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text),
        _ => None,
    }
}

/// Turn a raw status and body into the parsed JSON payload or an [`ApiError`].
pub fn interpret_response(status: u16, body: &str) -> Result<Value, ApiError> {
    let success = (200..300).contains(&status);

    let payload: Value = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(e) if success => return Err(ApiError::Decode(e.to_string())),
        Err(_) => {
            return Err(ApiError::Status {
                status,
                message: None,
            })
        }
    };

    if !success {
        let message = serde_json::from_value::<ApiErrorBody>(payload)
            .ok()
            .and_then(ApiErrorBody::into_message);
        return Err(ApiError::Status { status, message });
    }

    Ok(payload)
}
