//! Shared precondition checks for method requests
//!
//! Request types call these from `validate()` instead of repeating the same
//! blank/zero/upload checks. Each function takes the request being checked so
//! the resulting [`ValidationError`] names its origin.
//!
//! All checks are pure and can run concurrently from unrelated requests.

use crate::error::{Error, Result, ValidationError};
use crate::method::BotApiMethod;
use crate::types::{ChatId, InputFile};

/// Fail when the chat identifier is blank
///
/// # Examples
///
/// ```rust,ignore
/// validations::required_chat_id(&self.chat_id, self)?;
/// ```
pub fn required_chat_id<M: BotApiMethod>(chat_id: &ChatId, request: &M) -> Result<()> {
    if chat_id.is_blank() {
        return Err(reject("ChatId parameter can't be empty", request));
    }
    Ok(())
}

/// Fail when the user identifier is zero
pub fn required_user_id<M: BotApiMethod>(user_id: &i64, request: &M) -> Result<()> {
    if *user_id == 0 {
        return Err(reject("UserId parameter can't be empty", request));
    }
    Ok(())
}

/// Fail with `message` unless the file reference is a fresh upload
pub fn required_new_upload<M: BotApiMethod>(
    file: &InputFile,
    message: &str,
    request: &M,
) -> Result<()> {
    if !file.is_new() {
        return Err(reject(message, request));
    }
    Ok(())
}

/// Fail with `message` when the string is empty
pub fn required_non_empty<M: BotApiMethod>(value: &str, message: &str, request: &M) -> Result<()> {
    if value.is_empty() {
        return Err(reject(message, request));
    }
    Ok(())
}

fn reject<M: BotApiMethod>(message: &str, request: &M) -> Error {
    tracing::debug!(method = M::METHOD, reason = message, "Request failed validation");
    Error::Validation(ValidationError::new(message, request))
}
