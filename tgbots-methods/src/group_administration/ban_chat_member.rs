use serde::{Deserialize, Serialize};
use tgbots_core::ChatId;
use tgbots_macros::BotApiMethod;

/// Ban a user from a group, supergroup or channel
///
/// In supergroups and channels the user cannot rejoin on their own through
/// invite links until unbanned. The bot must be an administrator with the
/// appropriate rights. Answers `true` on success.
///
/// # Examples
///
/// ```rust
/// use tgbots_core::BotApiMethod;
/// use tgbots_methods::BanChatMember;
///
/// let request = BanChatMember::builder()
///     .chat_id("@somechannel")
///     .user_id(12345i64)
///     .until_date(1_700_000_000i64)
///     .build()
///     .unwrap();
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, BotApiMethod)]
#[bot_method(name = "banchatmember", response = bool)]
pub struct BanChatMember {
    /// Target chat id or `@channelusername`
    #[bot_method(chat_id)]
    pub chat_id: ChatId,
    /// Unique identifier of the target user
    #[bot_method(user_id)]
    pub user_id: i64,
    /// Unix time when the ban ends
    ///
    /// Less than 30 seconds or more than 366 days from now counts as forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
    /// Delete every message from the user in the chat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoke_messages: Option<bool>,
}
