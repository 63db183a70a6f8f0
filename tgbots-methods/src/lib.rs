//! Telegram Bot API method requests
//!
//! One struct per endpoint, each implementing
//! [`BotApiMethod`](tgbots_core::BotApiMethod) through
//! `#[derive(BotApiMethod)]`, plus a [`MethodRegistry`] for callers that pick
//! the endpoint at runtime.
//!
//! # Example
//!
//! ```rust
//! use tgbots_core::{BotApiMethod, Error};
//! use tgbots_methods::UnbanChatMember;
//!
//! let request = UnbanChatMember::new("@somechannel", 12345i64);
//! request.validate()?;
//!
//! // The transport sends `request.to_params()?` to `request.method()` and
//! // hands the raw answer back:
//! let unbanned = request.deserialize_response(r#"{"ok":true,"result":true}"#)?;
//! assert!(unbanned);
//! # Ok::<(), Error>(())
//! ```

pub mod group_administration;
pub mod registry;

pub use group_administration::*;
pub use registry::{MethodDescriptor, MethodRegistry, ValidateFn};
