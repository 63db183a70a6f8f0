use serde::{Deserialize, Serialize};
use tgbots_core::ChatId;
use tgbots_macros::BotApiMethod;

/// Unban a previously banned user in a supergroup or channel
///
/// The user will not return to the group or channel automatically, but will
/// be able to join via link. The bot must be an administrator.
///
/// By default the call guarantees that afterwards the user is not a member of
/// the chat but may join it, so a current member is removed. Set
/// `only_if_banned` to leave members alone.
///
/// Answers `true` on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, BotApiMethod)]
#[bot_method(name = "unbanchatmember", response = bool)]
pub struct UnbanChatMember {
    /// Target chat id or `@channelusername`
    #[bot_method(chat_id)]
    pub chat_id: ChatId,
    /// Unique identifier of the target user
    pub user_id: i64,
    /// Do nothing if the user is not banned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_if_banned: Option<bool>,
}
