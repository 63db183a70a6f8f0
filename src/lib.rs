//! tgbots - Typed Telegram Bot API method requests
//!
//! This is the main convenience crate that re-exports all tgbots sub-crates.
//! Use it when a single dependency covering request types, validation and
//! answer decoding is enough.
//!
//! # Architecture
//!
//! tgbots is organized into modular crates:
//!
//! - **tgbots-core**: method trait, chat ids, file references, codec,
//!   validations, error handling, observability
//! - **tgbots-methods**: concrete method requests and the method registry
//! - **tgbots-macros**: `#[derive(BotApiMethod)]`
//!
//! Sending requests is left to a transport: it takes `method()`,
//! `to_params()` and `uploads()` from a validated request, performs the HTTP
//! call and passes the raw answer to `deserialize_response()`.
//!
//! # Quick Start
//!
//! ```rust
//! use tgbots::{BotApiMethod, InputFile, SetChatPhoto, UnbanChatMember};
//!
//! # fn main() -> tgbots::Result<()> {
//! let unban = UnbanChatMember::new("@somechannel", 12345i64);
//! unban.validate()?;
//! assert_eq!(unban.method(), "unbanchatmember");
//!
//! let photo = SetChatPhoto::new(-1001234567890i64, InputFile::upload("logo.png", vec![0x89, 0x50]));
//! photo.validate()?;
//! assert!(photo.is_multipart());
//!
//! let done = unban.deserialize_response(r#"{"ok":true,"result":true}"#)?;
//! assert!(done);
//! # Ok(())
//! # }
//! ```
//!
//! # Runtime Lookup
//!
//! ```rust
//! use tgbots::MethodRegistry;
//!
//! let registry = MethodRegistry::with_builtin_methods();
//! let result = registry.validate_params("setChatTitle", serde_json::json!({"chat_id": 1, "title": ""}));
//! assert!(result.is_err());
//! ```

// Re-export all public APIs from sub-crates
pub use tgbots_core as core;
pub use tgbots_macros as macros;
pub use tgbots_methods as methods;

// Convenience re-exports of the most commonly used types
pub use tgbots_core::{
    codec, validations, ApiRequestError, BotApiMethod, ChatId, Error, InputFile, Result,
    ValidationError,
};
pub use tgbots_methods::*;
