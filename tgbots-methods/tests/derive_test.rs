//! `#[derive(BotApiMethod)]` on request types defined outside this crate

use serde::{Deserialize, Serialize};
use tgbots_core::{codec, BotApiMethod, ChatId, Error, FieldKind, InputFile};
use tgbots_macros::BotApiMethod;

#[derive(Debug, Clone, Serialize, Deserialize, BotApiMethod)]
#[bot_method(name = "setChatStickerSet", response = bool)]
struct SetChatStickerSet {
    #[bot_method(chat_id)]
    chat_id: ChatId,
    #[serde(rename = "sticker_set_name")]
    #[bot_method(non_empty = "Sticker set name can't be empty")]
    set_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, BotApiMethod)]
#[bot_method(name = "sendDocument", response = serde_json::Value)]
struct SendDocument {
    #[bot_method(chat_id)]
    chat_id: ChatId,
    document: InputFile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[bot_method(new_upload = "Thumbnail must be a new file to upload")]
    thumbnail: Option<InputFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, BotApiMethod)]
#[bot_method(name = "restrictChatMember", response = bool)]
#[serde(rename_all = "camelCase")]
struct RestrictChatMember {
    #[bot_method(chat_id)]
    chat_id: ChatId,
    #[bot_method(user_id)]
    user_id: i64,
    #[serde(rename = "until_date", default, skip_serializing_if = "Option::is_none")]
    until_date: Option<i64>,
}

#[test]
fn test_rename_all_is_the_wire_name() {
    let names: Vec<&str> = RestrictChatMember::FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["chatId", "userId", "until_date"]);
    assert_eq!(RestrictChatMember::CHAT_ID_FIELD, "chatId");

    let mut request = RestrictChatMember::new("@somegroup", 12345i64);
    request.until_date = Some(1_700_000_000);
    let params = request.to_params().unwrap();

    let mut keys: Vec<&str> = params.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected = names.clone();
    expected.sort_unstable();
    assert_eq!(keys, expected);

    let decoded: RestrictChatMember =
        codec::decode_request(serde_json::Value::Object(params)).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn test_rename_all_missing_key_uses_wire_name() {
    match codec::decode_request::<RestrictChatMember>(serde_json::json!({"chatId": "@somegroup"})) {
        Err(Error::MissingField { field, .. }) => assert_eq!(field, "userId"),
        other => panic!("Expected MissingField error, got {:?}", other),
    }
}

#[test]
fn test_uploads_are_named_by_field() {
    let request = SendDocument {
        chat_id: ChatId::from(42i64),
        document: InputFile::upload("a.jpg", vec![1]),
        thumbnail: Some(InputFile::upload("a.jpg", vec![2])),
        caption: None,
    };

    let params = request.to_params().unwrap();
    assert_eq!(params["document"], "attach://document");
    assert_eq!(params["thumbnail"], "attach://thumbnail");
}

#[test]
fn test_serde_rename_is_the_wire_name() {
    assert_eq!(SetChatStickerSet::SET_NAME_FIELD, "sticker_set_name");
    assert_eq!(SetChatStickerSet::FIELDS[1].name, "sticker_set_name");
    assert_eq!(SetChatStickerSet::FIELDS[1].kind, FieldKind::String);

    let params = SetChatStickerSet::new("@somegroup", "animals").to_params().unwrap();
    assert_eq!(params["sticker_set_name"], "animals");

    match SetChatStickerSet::builder().chat_id("@somegroup").build() {
        Err(Error::MissingField { field, .. }) => assert_eq!(field, "sticker_set_name"),
        other => panic!("Expected MissingField error, got {:?}", other),
    }
}

#[test]
fn test_non_empty_check() {
    match SetChatStickerSet::new("@somegroup", "").validate() {
        Err(Error::Validation(e)) => assert_eq!(e.message, "Sticker set name can't be empty"),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_optional_checks_run_only_when_present() {
    let mut request = SendDocument::new(42i64, InputFile::file_id("BQACAgIAAxkBAAIC"));
    assert!(request.validate().is_ok());
    assert!(!request.is_multipart());
    assert_eq!(request.uploads().len(), 1);

    request.thumbnail = Some(InputFile::file_id("AAMCAgADGQEAAgI"));
    assert!(matches!(request.validate(), Err(Error::Validation(_))));

    request.thumbnail = Some(InputFile::upload("thumb.jpg", vec![0xff, 0xd8]));
    assert!(request.validate().is_ok());
    assert!(request.is_multipart());

    let uploads = request.uploads();
    let names: Vec<&str> = uploads.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["document", "thumbnail"]);
}

#[test]
fn test_schema_marks_optional_fields() {
    let optional: Vec<&str> = SendDocument::FIELDS
        .iter()
        .filter(|f| !f.required)
        .map(|f| f.name)
        .collect();
    assert_eq!(optional, vec!["thumbnail", "caption"]);
}
