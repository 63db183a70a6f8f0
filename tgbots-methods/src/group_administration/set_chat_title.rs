use serde::{Deserialize, Serialize};
use tgbots_core::ChatId;
use tgbots_macros::BotApiMethod;

/// Change the title of a chat
///
/// Titles can't be changed for private chats. Answers `true` on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, BotApiMethod)]
#[bot_method(name = "setChatTitle", response = bool)]
pub struct SetChatTitle {
    /// Target chat id or `@channelusername`
    #[bot_method(chat_id)]
    pub chat_id: ChatId,
    /// New chat title, 1-128 characters
    #[bot_method(non_empty = "Title can't be empty")]
    pub title: String,
}
