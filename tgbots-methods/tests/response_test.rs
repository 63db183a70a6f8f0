//! Decoding Bot API answers through method requests

mod common;

use common::{error_answer, flood_answer, ok_answer};
use serde_json::json;
use tgbots_core::{BotApiMethod, Error};
use tgbots_methods::{ExportChatInviteLink, GetChatMemberCount, UnbanChatMember};

#[test]
fn test_unban_response_true() {
    let request = UnbanChatMember::new("@somechannel", 12345i64);
    assert!(request.deserialize_response("true").unwrap());
    assert!(request.deserialize_response(&ok_answer(json!(true))).unwrap());
}

#[test]
fn test_unban_response_failure() {
    let request = UnbanChatMember::new("@somechannel", 12345i64);
    let answer = error_answer(400, "Bad Request: chat not found");

    match request.deserialize_response(&answer) {
        Err(Error::Request(e)) => {
            assert_eq!(e.error_code, Some(400));
            assert_eq!(e.to_string(), "Bot API error: [400] Bad Request: chat not found");
        }
        other => panic!("Expected Request error, got {:?}", other),
    }
}

#[test]
fn test_flood_control_exposes_retry_after() {
    let request = GetChatMemberCount::new("@somechannel");
    match request.deserialize_response(&flood_answer(5)) {
        Err(Error::Request(e)) => assert_eq!(e.retry_after(), Some(5)),
        other => panic!("Expected Request error, got {:?}", other),
    }
}

#[test]
fn test_unreadable_answer_keeps_payload() {
    let request = ExportChatInviteLink::new("@somechannel");
    match request.deserialize_response("<html>502 Bad Gateway</html>") {
        Err(Error::Request(e)) => {
            assert_eq!(e.payload.as_deref(), Some("<html>502 Bad Gateway</html>"));
            assert!(e.error_code.is_none());
        }
        other => panic!("Expected Request error, got {:?}", other),
    }
}

#[test]
fn test_typed_results() {
    let count = GetChatMemberCount::new(-100123i64)
        .deserialize_response(&ok_answer(json!(314)))
        .unwrap();
    assert_eq!(count, 314);

    let link = ExportChatInviteLink::new(-100123i64)
        .deserialize_response(&ok_answer(json!("https://t.me/+xyz")))
        .unwrap();
    assert_eq!(link, "https://t.me/+xyz");
}
