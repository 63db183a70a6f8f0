//! Runtime method lookup and parameter validation

use serde_json::json;
use tgbots_core::{Error, FieldKind};
use tgbots_methods::{MethodRegistry, SetChatPhoto, UnbanChatMember};

#[test]
fn test_lookup_is_case_insensitive() {
    let registry = MethodRegistry::with_builtin_methods();

    for name in ["setChatPhoto", "setchatphoto", "SETCHATPHOTO"] {
        let descriptor = registry.get(name).unwrap();
        assert_eq!(descriptor.name, SetChatPhoto::PATH);
    }
    for name in ["unbanchatmember", "unbanChatMember"] {
        assert_eq!(registry.get(name).unwrap().name, UnbanChatMember::PATH);
    }
}

#[test]
fn test_descriptor_schema() {
    let registry = MethodRegistry::with_builtin_methods();
    let descriptor = registry.get("setChatPhoto").unwrap();

    assert!(descriptor.multipart);
    assert_eq!(descriptor.response, "bool");
    let photo = descriptor.fields.iter().find(|f| f.name == "photo").unwrap();
    assert!(photo.required);
    assert_eq!(photo.kind, FieldKind::InputFile);

    let count = registry.get("getChatMemberCount").unwrap();
    assert!(!count.multipart);
    assert_eq!(count.response, "i64");
}

#[test]
fn test_validate_params() {
    let registry = MethodRegistry::with_builtin_methods();

    assert!(registry
        .validate_params(
            "unbanChatMember",
            json!({"chat_id": "@somechannel", "user_id": 12345, "extra": "ignored"})
        )
        .is_ok());

    assert!(matches!(
        registry.validate_params("unbanchatmember", json!({"chat_id": "", "user_id": 12345})),
        Err(Error::Validation(_))
    ));

    assert!(matches!(
        registry.validate_params("setChatTitle", json!({"chat_id": 1, "title": null})),
        Err(Error::MissingField { field: "title", .. })
    ));

    assert!(matches!(
        registry.validate_params("kickChatMember", json!({})),
        Err(Error::MethodNotFound(_))
    ));
}

#[test]
fn test_shared_between_threads() {
    let registry = MethodRegistry::with_builtin_methods();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                registry
                    .validate_params("leavechat", json!({"chat_id": -100 - i}))
                    .is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
