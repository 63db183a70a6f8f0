//! Error types for tgbots
//!
//! Every failure this layer can report is a variant of [`Error`]:
//!
//! - **MissingField**: a required field was never set (construction error)
//! - **Validation**: a semantic precondition failed in `validate()`
//! - **Request**: the Bot API answered with a failure payload, or the answer
//!   could not be parsed
//! - **Serialization**: a request could not be encoded
//! - **MethodNotFound**: a registry lookup for an unknown endpoint
//!
//! None of them are retried or recovered here. They are handed to the caller
//! as-is, always before (validation) or after (request) the network step that
//! the transport performs.
//!
//! # Examples
//!
//! ```rust
//! use tgbots_core::{ApiRequestError, Error};
//!
//! let error = Error::Request(ApiRequestError::new(400, "Bad Request: chat not found"));
//! assert_eq!(error.to_string(), "Bot API error: [400] Bad Request: chat not found");
//! ```

use crate::method::BotApiMethod;
use crate::types::{ApiResponse, ResponseParameters};
use thiserror::Error;

/// Result type for tgbots operations
pub type Result<T> = std::result::Result<T, Error>;

/// Application-level error type for tgbots operations
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A required field was not provided when the request was built
    ///
    /// Raised by generated builders and when a request is decoded from JSON
    /// that lacks one of its required keys.
    #[error("{method}: required field `{field}` is missing")]
    MissingField {
        /// Endpoint name of the request being built
        method: &'static str,
        /// Wire name of the missing field
        field: &'static str,
    },

    /// Client-side validation rejected the request
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The Bot API reported a failure, or its answer was unreadable
    #[error(transparent)]
    Request(#[from] ApiRequestError),

    /// Encoding a request to JSON failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The endpoint name is not known to the registry
    #[error("Method not found: {0}")]
    MethodNotFound(String),
}

/// A semantic precondition of a request did not hold
///
/// Carries the offending request (its endpoint name and a debug rendering)
/// so that the failure can be attributed when many requests are in flight.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{method}: {message}")]
pub struct ValidationError {
    /// Human-readable reason
    pub message: String,
    /// Endpoint name of the rejected request
    pub method: &'static str,
    /// Debug rendering of the rejected request
    pub request: String,
}

impl ValidationError {
    /// Create a validation error attributed to `request`
    pub fn new<M: BotApiMethod>(message: impl Into<String>, request: &M) -> Self {
        Self {
            message: message.into(),
            method: M::METHOD,
            request: format!("{:?}", request),
        }
    }
}

/// Failure reported by the Bot API, or an answer that could not be parsed
///
/// Mirrors the failure envelope of the Bot API:
///
/// ```json
/// {"ok": false, "error_code": 429, "description": "Too Many Requests: retry after 5",
///  "parameters": {"retry_after": 5}}
/// ```
///
/// When the raw text was not a readable answer at all, `error_code` is `None`
/// and `payload` holds the text that was received.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequestError {
    /// Numeric error code from the API, if it sent one
    pub error_code: Option<i32>,
    /// Human-readable description
    pub description: String,
    /// Extra hints such as `retry_after` or `migrate_to_chat_id`
    pub parameters: Option<ResponseParameters>,
    /// The raw answer, kept when it could not be interpreted
    pub payload: Option<String>,
}

impl ApiRequestError {
    /// Create an error with an API code and description
    pub fn new(error_code: i32, description: impl Into<String>) -> Self {
        Self {
            error_code: Some(error_code),
            description: description.into(),
            parameters: None,
            payload: None,
        }
    }

    /// Build the error from a failure envelope
    pub fn from_response<T>(response: ApiResponse<T>) -> Self {
        Self {
            error_code: response.error_code,
            description: response
                .description
                .unwrap_or_else(|| "Request failed without a description".to_string()),
            parameters: response.parameters,
            payload: None,
        }
    }

    /// Build the error for an answer that could not be deserialized
    pub fn unparsable(payload: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self {
            error_code: None,
            description: format!("Unable to deserialize response: {}", reason),
            parameters: None,
            payload: Some(payload.into()),
        }
    }

    /// Seconds to wait before retrying, when the API asked for it
    pub fn retry_after(&self) -> Option<i32> {
        self.parameters.as_ref().and_then(|p| p.retry_after)
    }

    /// New supergroup id, when the chat was migrated
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters.as_ref().and_then(|p| p.migrate_to_chat_id)
    }
}

impl std::fmt::Display for ApiRequestError {
    /// Formats as "Bot API error: [code] description"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.error_code {
            Some(code) => write!(f, "Bot API error: [{}] {}", code, self.description),
            None => write!(f, "Bot API error: {}", self.description),
        }
    }
}

impl std::error::Error for ApiRequestError {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
