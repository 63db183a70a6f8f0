//! JSON encoding of requests and decoding of Bot API answers
//!
//! # Requests
//!
//! [`encode_params`] turns a request into the JSON object the transport sends.
//! Absent optional fields are never emitted, not even as `null`.
//!
//! # Answers
//!
//! [`decode_response`] accepts the two shapes an answer can take:
//!
//! - the Bot API envelope, `{"ok":true,"result":...}` on success and
//!   `{"ok":false,"error_code":...,"description":...}` on failure
//! - a bare JSON value such as `true`, already unwrapped by the transport
//!
//! Failures and unreadable text both become `Error::Request`, so callers have
//! a single error path for "the call did not produce a result".
//!
//! # Examples
//!
//! ```rust
//! use tgbots_core::{codec, Error};
//!
//! let ok: bool = codec::decode_response(r#"{"ok":true,"result":true}"#).unwrap();
//! assert!(ok);
//!
//! let bare: bool = codec::decode_response("true").unwrap();
//! assert!(bare);
//!
//! let failed = codec::decode_response::<bool>(
//!     r#"{"ok":false,"error_code":400,"description":"Bad Request: user not found"}"#,
//! );
//! assert!(matches!(failed, Err(Error::Request(_))));
//! ```

use crate::error::{ApiRequestError, Error, Result};
use crate::method::BotApiMethod;
use crate::types::ApiResponse;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Encode any serializable value to a JSON string
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Serialization(e.to_string()))
}

/// Encode a request to its JSON object of parameters
///
/// # Errors
///
/// `Error::Serialization` if the value does not serialize to a JSON object.
pub fn encode_params<T: Serialize + ?Sized>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(mut params) => {
            params.retain(|_, v| !v.is_null());
            Ok(params)
        }
        other => Err(Error::Serialization(format!(
            "request parameters must be a JSON object, got {}",
            kind_of(&other)
        ))),
    }
}

/// Decode a JSON string to a specific type
pub fn decode_as<'de, T: Deserialize<'de>>(data: &'de str) -> Result<T> {
    serde_json::from_str(data).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode a request from its JSON object of parameters
///
/// Unknown keys are ignored. A missing or `null` required key is reported as
/// `Error::MissingField`, the same construction error a builder gives.
///
/// # Errors
///
/// - `Error::MissingField` for the first absent required field
/// - `Error::Serialization` if a present value has the wrong shape
pub fn decode_request<M: BotApiMethod + DeserializeOwned>(params: Value) -> Result<M> {
    if let Some(missing) = M::FIELDS
        .iter()
        .find(|field| field.required && params.get(field.name).map_or(true, Value::is_null))
    {
        return Err(Error::MissingField {
            method: M::METHOD,
            field: missing.name,
        });
    }
    serde_json::from_value(params).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode the raw answer of a Bot API call
///
/// # Errors
///
/// `Error::Request` when the answer is a failure envelope, is not JSON, or
/// does not match `T`.
pub fn decode_response<T: DeserializeOwned>(answer: &str) -> Result<T> {
    let value: Value = serde_json::from_str(answer)
        .map_err(|e| ApiRequestError::unparsable(answer, e))?;

    let is_envelope = value
        .as_object()
        .map_or(false, |object| object.get("ok").map_or(false, Value::is_boolean));

    if !is_envelope {
        return serde_json::from_value(value)
            .map_err(|e| ApiRequestError::unparsable(answer, e).into());
    }

    let response: ApiResponse<Value> =
        serde_json::from_value(value).map_err(|e| ApiRequestError::unparsable(answer, e))?;

    if !response.ok {
        let error = ApiRequestError::from_response(response);
        tracing::warn!(
            error_code = ?error.error_code,
            description = %error.description,
            "Bot API returned a failure"
        );
        return Err(error.into());
    }

    match response.result {
        Some(result) => serde_json::from_value(result)
            .map_err(|e| ApiRequestError::unparsable(answer, e).into()),
        None => Err(ApiRequestError::unparsable(answer, "successful answer without a result").into()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
