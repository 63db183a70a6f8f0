use serde::{Deserialize, Serialize};
use tgbots_core::ChatId;
use tgbots_macros::BotApiMethod;

/// Get the number of members in a chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, BotApiMethod)]
#[bot_method(name = "getChatMemberCount", response = i64)]
pub struct GetChatMemberCount {
    /// Target chat id or `@channelusername`
    #[bot_method(chat_id)]
    pub chat_id: ChatId,
}
