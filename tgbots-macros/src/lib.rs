//! Procedural macros for tgbots
//!
//! Bot API method requests all share the same shape: a handful of typed
//! fields, a fixed endpoint name, a few preconditions and a response type.
//! Writing that by hand for every endpoint is pure repetition, so this crate
//! generates it from a plain struct.
//!
//! # `#[derive(BotApiMethod)]`
//!
//! Given
//!
//! ```ignore
//! use serde::{Deserialize, Serialize};
//! use tgbots_core::ChatId;
//! use tgbots_macros::BotApiMethod;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize, BotApiMethod)]
//! #[bot_method(name = "unbanchatmember", response = bool)]
//! pub struct UnbanChatMember {
//!     #[bot_method(chat_id)]
//!     pub chat_id: ChatId,
//!     pub user_id: i64,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub only_if_banned: Option<bool>,
//! }
//! ```
//!
//! the derive generates:
//!
//! - `impl tgbots_core::BotApiMethod for UnbanChatMember` with `METHOD`,
//!   `FIELDS`, `Response`, `validate()` and, when the struct has file
//!   reference fields, `uploads()`
//! - wire name constants: `UnbanChatMember::CHAT_ID_FIELD`, ...
//! - `UnbanChatMember::new(chat_id, user_id)`, taking every non-`Option`
//!   field positionally as `impl Into<T>`
//! - `UnbanChatMember::builder()` returning an `UnbanChatMemberBuilder` whose
//!   `build()` fails with `Error::MissingField` when a required field was
//!   never set
//!
//! # Field attributes
//!
//! | Attribute | Check run by `validate()` |
//! |---|---|
//! | `#[bot_method(chat_id)]` | chat id is not blank |
//! | `#[bot_method(user_id)]` | user id is not zero |
//! | `#[bot_method(new_upload = "message")]` | file reference is a fresh upload |
//! | `#[bot_method(non_empty = "message")]` | string is not empty |
//!
//! Checks on `Option` fields only run when a value is present. Wire names
//! follow `#[serde(rename = "...")]` when one is given.
//!
//! The generated code refers to `::tgbots_core`, so the crate using the derive
//! must depend on `tgbots-core` directly.

mod bot_method;

use proc_macro::TokenStream;

/// Derive a Bot API method request
///
/// See the crate documentation for the generated items and the supported
/// attributes.
#[proc_macro_derive(BotApiMethod, attributes(bot_method))]
pub fn derive_bot_api_method(input: TokenStream) -> TokenStream {
    bot_method::derive_impl(input)
}
