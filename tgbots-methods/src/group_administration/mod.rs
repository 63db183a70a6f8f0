//! Group and channel administration methods
//!
//! Every request here targets a chat through a [`ChatId`](tgbots_core::ChatId)
//! and is rejected by `validate()` when that id is blank.

mod ban_chat_member;
mod delete_chat_photo;
mod export_chat_invite_link;
mod get_chat_member_count;
mod leave_chat;
mod set_chat_description;
mod set_chat_photo;
mod set_chat_title;
mod unban_chat_member;

pub use ban_chat_member::{BanChatMember, BanChatMemberBuilder};
pub use delete_chat_photo::{DeleteChatPhoto, DeleteChatPhotoBuilder};
pub use export_chat_invite_link::{ExportChatInviteLink, ExportChatInviteLinkBuilder};
pub use get_chat_member_count::{GetChatMemberCount, GetChatMemberCountBuilder};
pub use leave_chat::{LeaveChat, LeaveChatBuilder};
pub use set_chat_description::{SetChatDescription, SetChatDescriptionBuilder};
pub use set_chat_photo::{SetChatPhoto, SetChatPhotoBuilder};
pub use set_chat_title::{SetChatTitle, SetChatTitleBuilder};
pub use unban_chat_member::{UnbanChatMember, UnbanChatMemberBuilder};
