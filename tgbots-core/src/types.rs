//! Shared Bot API value types
//!
//! The types in this module are the building blocks of every method request:
//!
//! - [`ChatId`]: a chat identifier, given either as a numeric id or as an
//!   `@channelusername`, always kept in its string wire form
//! - [`InputFile`]: a file reference, either reusing something the Bot API
//!   already knows (file id, URL) or carrying a fresh upload
//! - [`ApiResponse`] / [`ResponseParameters`]: the answer envelope
//!
//! # Chat identifiers
//!
//! The Bot API accepts `chat_id` as an integer or as a string. Requests in this
//! crate normalize both shapes to the string form at the moment the value is
//! assigned, so a request built from `987654321` and one built from
//! `"987654321"` are indistinguishable.
//!
//! ```rust
//! use tgbots_core::ChatId;
//!
//! let numeric = ChatId::from(987654321i64);
//! assert_eq!(numeric.as_str(), "987654321");
//!
//! let channel: ChatId = "@somechannel".into();
//! assert!(channel.is_username());
//! ```

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a target chat, or username of a target channel
///
/// Numeric ids convert from `i64` only. Supergroup and channel ids do not fit
/// in an `i32`, so integer literals need the suffix:
/// `UnbanChatMember::new(-1001234567890i64, 12345i64)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ChatId(String);

impl ChatId {
    /// The string wire form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// True for `@channelusername` identifiers
    pub fn is_username(&self) -> bool {
        self.0.starts_with('@')
    }

    /// The numeric id, if this identifier is one
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId(id.to_string())
    }
}

impl From<String> for ChatId {
    fn from(id: String) -> Self {
        ChatId(id)
    }
}

impl From<&str> for ChatId {
    fn from(id: &str) -> Self {
        ChatId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ChatId {
    /// Accepts both `"chat_id": 42` and `"chat_id": "@name"`
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawChatId {
            Number(i64),
            Text(String),
        }

        Ok(match RawChatId::deserialize(deserializer)? {
            RawChatId::Number(id) => ChatId::from(id),
            RawChatId::Text(id) => ChatId(id),
        })
    }
}

/// Prefix the Bot API uses to point an inline field at a multipart part
pub const ATTACH_PREFIX: &str = "attach://";

/// Reference to a file parameter of a request
///
/// Only [`InputFile::Upload`] counts as a *new* file. Some endpoints (setting a
/// chat photo, for instance) refuse anything else, which their `validate()`
/// enforces through [`crate::validations::required_new_upload`].
///
/// # Multipart naming
///
/// A fresh upload travels as a multipart part named after the wire name of the
/// request field holding it (`photo` for a chat photo), with
/// [`InputUpload::file_name`] as the part's file name. The inline parameter of
/// that field is `attach://<wire name>`, as produced by
/// [`BotApiMethod::to_params`](crate::BotApiMethod::to_params). Two uploads in
/// one request therefore never collide, whatever their file names.
///
/// A file id or URL is sent inline as-is.
///
/// Serialized on its own, outside any request field, an upload has no wire
/// name to point at and renders as `attach://<file_name>`.
#[derive(Clone, PartialEq, Eq)]
pub enum InputFile {
    /// A file already stored on the Bot API servers
    FileId(String),
    /// A file the Bot API should fetch from the web
    Url(String),
    /// A fresh upload sent with the request
    Upload(InputUpload),
}

/// Bytes of a fresh upload
#[derive(Clone, PartialEq, Eq)]
pub struct InputUpload {
    /// File name reported in the multipart part
    pub file_name: String,
    pub data: Vec<u8>,
}

impl InputFile {
    pub fn file_id(id: impl Into<String>) -> Self {
        InputFile::FileId(id.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        InputFile::Url(url.into())
    }

    pub fn upload(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        InputFile::Upload(InputUpload {
            file_name: file_name.into(),
            data: data.into(),
        })
    }

    /// True only for fresh uploads
    pub fn is_new(&self) -> bool {
        matches!(self, InputFile::Upload(_))
    }

    /// The upload, if this reference carries one
    pub fn as_upload(&self) -> Option<&InputUpload> {
        match self {
            InputFile::Upload(upload) => Some(upload),
            _ => None,
        }
    }

    /// The inline parameter for this reference when it is sent as the
    /// multipart part `part`
    ///
    /// ```rust
    /// use tgbots_core::InputFile;
    ///
    /// let photo = InputFile::upload("logo.png", vec![0x89, 0x50]);
    /// assert_eq!(photo.inline_value("photo"), "attach://photo");
    /// assert_eq!(InputFile::file_id("AgAD").inline_value("photo"), "AgAD");
    /// ```
    pub fn inline_value(&self, part: &str) -> String {
        match self {
            InputFile::FileId(id) => id.clone(),
            InputFile::Url(url) => url.clone(),
            InputFile::Upload(_) => format!("{}{}", ATTACH_PREFIX, part),
        }
    }
}

// Uploads can be large; print their size, not their bytes
impl fmt::Debug for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFile::FileId(id) => f.debug_tuple("FileId").field(id).finish(),
            InputFile::Url(url) => f.debug_tuple("Url").field(url).finish(),
            InputFile::Upload(upload) => f.debug_tuple("Upload").field(upload).finish(),
        }
    }
}

impl fmt::Debug for InputUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputUpload")
            .field("file_name", &self.file_name)
            .field("len", &self.data.len())
            .finish()
    }
}

impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let part = self.as_upload().map_or("", |upload| upload.file_name.as_str());
        serializer.serialize_str(&self.inline_value(part))
    }
}

impl<'de> Deserialize<'de> for InputFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        if value.starts_with(ATTACH_PREFIX) {
            return Err(de::Error::custom(
                "an attach:// reference cannot be decoded without its multipart data",
            ));
        }
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(InputFile::Url(value))
        } else {
            Ok(InputFile::FileId(value))
        }
    }
}

/// Answer envelope returned by every Bot API method
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error_code: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Option<ResponseParameters>,
}

/// Hints attached to some failures
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group was migrated to a supergroup with this id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Flood control: seconds to wait before repeating the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i32>,
}
