use serde::{Deserialize, Serialize};
use tgbots_core::{ChatId, InputFile};
use tgbots_macros::BotApiMethod;

/// Set a new profile photo for a chat
///
/// Photos can't be changed for private chats. The bot must be an
/// administrator in the chat with the appropriate rights. Answers `true` on
/// success.
///
/// The photo has to be a fresh upload: reusing a file id or a URL is rejected
/// by `validate()` before anything is sent, and a request carrying the upload
/// always reports `is_multipart() == true`.
///
/// # Examples
///
/// ```rust
/// use tgbots_core::{BotApiMethod, InputFile};
/// use tgbots_methods::SetChatPhoto;
///
/// let request = SetChatPhoto::new(-1001234567890i64, InputFile::upload("logo.png", vec![0x89, 0x50]));
/// assert!(request.validate().is_ok());
/// assert!(request.is_multipart());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, BotApiMethod)]
#[bot_method(name = "setChatPhoto", response = bool)]
pub struct SetChatPhoto {
    /// Target chat id or `@channelusername`
    #[bot_method(chat_id)]
    pub chat_id: ChatId,
    /// New chat photo, uploaded with multipart/form-data
    #[bot_method(new_upload = "Photo parameter is required and must be a new file to upload")]
    pub photo: InputFile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgbots_core::{BotApiMethod, Error};

    fn upload() -> InputFile {
        InputFile::upload("photo.jpg", vec![0xff, 0xd8, 0xff])
    }

    #[test]
    fn test_method_name() {
        let request = SetChatPhoto::new("@somechannel", upload());
        assert_eq!(request.method(), "setChatPhoto");
        assert_eq!(SetChatPhoto::PATH, "setChatPhoto");
        assert_eq!(SetChatPhoto::PHOTO_FIELD, "photo");
    }

    #[test]
    fn test_validate_accepts_fresh_upload() {
        let request = SetChatPhoto::new(12345i64, upload());
        assert!(request.validate().is_ok());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_reused_file() {
        for photo in [
            InputFile::file_id("AgACAgIAAxkBAAIB"),
            InputFile::url("https://example.com/photo.jpg"),
        ] {
            let request = SetChatPhoto::new(12345i64, photo);
            match request.validate() {
                Err(Error::Validation(e)) => {
                    assert_eq!(
                        e.message,
                        "Photo parameter is required and must be a new file to upload"
                    );
                    assert_eq!(e.method, "setChatPhoto");
                }
                other => panic!("Expected Validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_checks_chat_id_first() {
        let request = SetChatPhoto::new("", InputFile::file_id("AgAD"));
        match request.validate() {
            Err(Error::Validation(e)) => assert!(e.message.contains("ChatId")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_uploads_and_params() {
        let request = SetChatPhoto::new(-100777i64, upload());

        let uploads = request.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].0, "photo");
        assert!(uploads[0].1.is_new());

        let params = request.to_params().unwrap();
        assert_eq!(params["chat_id"], "-100777");
        assert_eq!(params["photo"], "attach://photo");
        assert_eq!(uploads[0].1.as_upload().unwrap().file_name, "photo.jpg");
    }

    #[test]
    fn test_builder_requires_photo() {
        match SetChatPhoto::builder().chat_id(42i64).build() {
            Err(Error::MissingField { method, field }) => {
                assert_eq!(method, "setChatPhoto");
                assert_eq!(field, "photo");
            }
            other => panic!("Expected MissingField error, got {:?}", other),
        }
    }
}
