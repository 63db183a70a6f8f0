use serde::{Deserialize, Serialize};
use tgbots_core::ChatId;
use tgbots_macros::BotApiMethod;

/// Generate a new primary invite link for a chat
///
/// Any previously generated primary link is revoked. Answers the new link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, BotApiMethod)]
#[bot_method(name = "exportChatInviteLink", response = String)]
pub struct ExportChatInviteLink {
    /// Target chat id or `@channelusername`
    #[bot_method(chat_id)]
    pub chat_id: ChatId,
}
