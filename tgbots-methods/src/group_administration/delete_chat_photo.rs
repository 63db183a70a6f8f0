use serde::{Deserialize, Serialize};
use tgbots_core::ChatId;
use tgbots_macros::BotApiMethod;

/// Delete the photo of a chat
///
/// Photos can't be changed for private chats. Answers `true` on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, BotApiMethod)]
#[bot_method(name = "deleteChatPhoto", response = bool)]
pub struct DeleteChatPhoto {
    /// Target chat id or `@channelusername`
    #[bot_method(chat_id)]
    pub chat_id: ChatId,
}
