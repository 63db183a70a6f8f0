use serde::{Deserialize, Serialize};
use tgbots_core::ChatId;
use tgbots_macros::BotApiMethod;

/// Change the description of a group, supergroup or channel
///
/// Leaving `description` unset clears it. Answers `true` on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, BotApiMethod)]
#[bot_method(name = "setChatDescription", response = bool)]
pub struct SetChatDescription {
    /// Target chat id or `@channelusername`
    #[bot_method(chat_id)]
    pub chat_id: ChatId,
    /// New chat description, 0-255 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgbots_core::BotApiMethod;

    #[test]
    fn test_clear_description() {
        let request = SetChatDescription::new("@somechannel");
        assert!(request.validate().is_ok());
        assert!(!request.to_params().unwrap().contains_key("description"));
    }

    #[test]
    fn test_builder_sets_description() {
        let request = SetChatDescription::builder()
            .chat_id("@somechannel")
            .description("Weekly digest")
            .build()
            .unwrap();
        assert_eq!(request.description.as_deref(), Some("Weekly digest"));
        assert_eq!(request.to_params().unwrap()["description"], "Weekly digest");
    }
}
