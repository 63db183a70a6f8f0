//! Core request types, codec and validation for tgbots
//!
//! This crate provides the foundation every Bot API method request is built
//! on:
//!
//! - **Method trait**: [`BotApiMethod`], one implementation per endpoint
//! - **Types**: [`ChatId`], [`InputFile`], the answer envelope
//! - **Validations**: shared precondition checks used by `validate()`
//! - **Codec**: parameter encoding and answer decoding
//! - **Error handling**: one [`Error`] enum for construction, validation and
//!   API failures
//! - **Observability**: `tracing` subscriber setup with optional OTLP export
//!
//! # Architecture
//!
//! The crate is transport-agnostic. It describes *what* to send and how to
//! read the answer; sending it over HTTP, authenticating, retrying and polling
//! for updates are left to a transport built on top.
//!
//! # Example
//!
//! ```rust
//! use tgbots_core::{codec, ChatId, InputFile};
//!
//! let chat_id = ChatId::from(-1001234567890i64);
//! assert_eq!(chat_id.as_str(), "-1001234567890");
//!
//! let photo = InputFile::upload("logo.png", vec![0x89, 0x50, 0x4e, 0x47]);
//! assert!(photo.is_new());
//!
//! let unbanned: bool = codec::decode_response(r#"{"ok":true,"result":true}"#).unwrap();
//! assert!(unbanned);
//! ```

pub mod codec;
pub mod error;
pub mod method;
pub mod observability;
pub mod types;
pub mod validations;

pub use error::{ApiRequestError, Error, Result, ValidationError};
pub use method::{BotApiMethod, FieldKind, FieldSpec};
pub use observability::{init_observability, shutdown_observability, LogFormat, ObservabilityConfig};
pub use types::{ApiResponse, ChatId, InputFile, InputUpload, ResponseParameters, ATTACH_PREFIX};
