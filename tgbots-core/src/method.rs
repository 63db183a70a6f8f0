//! The method request abstraction
//!
//! Every Bot API endpoint is modelled as one plain struct implementing
//! [`BotApiMethod`]. The trait is what the transport sees: it asks the request
//! for its endpoint name, its parameters and its uploads, sends them, and hands
//! the raw answer back to [`BotApiMethod::deserialize_response`].
//!
//! # Lifecycle
//!
//! 1. **Construct**: `Type::new(required...)` or `Type::builder()...build()?`
//! 2. **Configure**: set optional fields
//! 3. **Validate**: `request.validate()?`, before anything leaves the process
//! 4. **Send**: the transport encodes `to_params()` (multipart when
//!    `is_multipart()`)
//! 5. **Decode**: `request.deserialize_response(&raw)?`
//!
//! Implementations are normally generated with `#[derive(BotApiMethod)]` from
//! the `tgbots-macros` crate rather than written by hand.
//!
//! # Examples
//!
//! ```rust
//! use serde::Serialize;
//! use tgbots_core::{validations, BotApiMethod, ChatId, FieldKind, FieldSpec, Result};
//!
//! #[derive(Debug, Serialize)]
//! struct LeaveChat {
//!     chat_id: ChatId,
//! }
//!
//! impl BotApiMethod for LeaveChat {
//!     const METHOD: &'static str = "leavechat";
//!     const FIELDS: &'static [FieldSpec] = &[FieldSpec::required("chat_id", FieldKind::ChatId)];
//!     type Response = bool;
//!
//!     fn validate(&self) -> Result<()> {
//!         validations::required_chat_id(&self.chat_id, self)
//!     }
//! }
//!
//! let request = LeaveChat { chat_id: ChatId::from(-100123i64) };
//! assert!(request.validate().is_ok());
//! assert!(request.deserialize_response("true").unwrap());
//! ```

use crate::codec;
use crate::error::Result;
use crate::types::InputFile;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Shape of a request field on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
    ChatId,
    InputFile,
    /// Any nested JSON object
    Object,
}

/// Static description of one request field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Wire name (the JSON key)
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: true,
            kind,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: false,
            kind,
        }
    }
}

/// One remote Bot API call
///
/// Implementors are plain data: no interior mutability, no I/O, safe to build
/// and validate from any thread.
pub trait BotApiMethod: Serialize + fmt::Debug {
    /// Endpoint selector, used by the transport to build the request path
    const METHOD: &'static str;

    /// Every field of the request, in declaration order
    const FIELDS: &'static [FieldSpec];

    /// Type of the `result` the endpoint answers with
    type Response: DeserializeOwned;

    /// The endpoint selector of this request
    fn method(&self) -> &'static str {
        Self::METHOD
    }

    /// Check request-specific preconditions
    ///
    /// Must be free of side effects: calling it twice on an unchanged request
    /// gives the same outcome both times.
    ///
    /// # Errors
    ///
    /// `Error::Validation` naming the failed precondition.
    fn validate(&self) -> Result<()>;

    /// Parse the raw answer of the endpoint
    ///
    /// # Errors
    ///
    /// `Error::Request` when the answer is a failure envelope or cannot be
    /// parsed into [`Self::Response`].
    fn deserialize_response(&self, answer: &str) -> Result<Self::Response> {
        codec::decode_response(answer)
    }

    /// File reference fields paired with their wire names
    ///
    /// The wire name is also the multipart part name a fresh upload is sent
    /// under.
    fn uploads(&self) -> Vec<(&'static str, &InputFile)> {
        Vec::new()
    }

    /// True when at least one file reference is a fresh upload
    ///
    /// The transport must then use multipart encoding for the call.
    fn is_multipart(&self) -> bool {
        self.uploads().iter().any(|(_, file)| file.is_new())
    }

    /// Present fields as a JSON object keyed by wire name
    ///
    /// File reference fields hold their inline value: the file id, the URL, or
    /// `attach://<wire name>` for a fresh upload.
    fn to_params(&self) -> Result<Map<String, Value>> {
        let mut params = codec::encode_params(self)?;
        for (name, file) in self.uploads() {
            params.insert(name.to_string(), Value::String(file.inline_value(name)));
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::ChatId;
    use crate::validations;

    #[derive(Debug, Serialize)]
    struct SetChatSticker {
        chat_id: ChatId,
        sticker: InputFile,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    }

    impl BotApiMethod for SetChatSticker {
        const METHOD: &'static str = "setChatSticker";
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::required("chat_id", FieldKind::ChatId),
            FieldSpec::required("sticker", FieldKind::InputFile),
            FieldSpec::optional("caption", FieldKind::String),
        ];
        type Response = bool;

        fn validate(&self) -> Result<()> {
            validations::required_chat_id(&self.chat_id, self)
        }

        fn uploads(&self) -> Vec<(&'static str, &InputFile)> {
            vec![("sticker", &self.sticker)]
        }
    }

    #[test]
    fn test_method_name() {
        let request = SetChatSticker {
            chat_id: "@somechannel".into(),
            sticker: InputFile::file_id("CAACAgIAAxkBAAIC"),
            caption: None,
        };
        assert_eq!(request.method(), "setChatSticker");
    }

    #[test]
    fn test_is_multipart_follows_uploads() {
        let reused = SetChatSticker {
            chat_id: "@somechannel".into(),
            sticker: InputFile::file_id("CAACAgIAAxkBAAIC"),
            caption: None,
        };
        assert!(!reused.is_multipart());

        let fresh = SetChatSticker {
            chat_id: "@somechannel".into(),
            sticker: InputFile::upload("sticker.webp", vec![1, 2]),
            caption: None,
        };
        assert!(fresh.is_multipart());
    }

    #[test]
    fn test_to_params_omits_absent_fields() {
        let request = SetChatSticker {
            chat_id: ChatId::from(42i64),
            sticker: InputFile::upload("sticker.webp", vec![1, 2]),
            caption: None,
        };

        let params = request.to_params().unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params["chat_id"], "42");
        assert_eq!(params["sticker"], "attach://sticker");
        assert!(!params.contains_key("caption"));
    }

    #[test]
    fn test_default_deserialize_response() {
        let request = SetChatSticker {
            chat_id: ChatId::from(42i64),
            sticker: InputFile::file_id("x"),
            caption: None,
        };

        assert!(request.deserialize_response(r#"{"ok":true,"result":true}"#).unwrap());
        match request.deserialize_response(r#"{"ok":false,"error_code":400,"description":"no"}"#) {
            Err(Error::Request(e)) => assert_eq!(e.error_code, Some(400)),
            other => panic!("Expected Request error, got {:?}", other),
        }
    }
}
