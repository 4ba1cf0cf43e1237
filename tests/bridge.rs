//! Host bridge tests - method calls, notifications, view lifecycle

mod common;

use common::test_registry;
use mention_field::bridge::{
    CollectingNotifier, HostEvent, MethodCall, MethodResult, ViewRegistry, CHANNEL_NAME,
};
use mention_field::commands::Cmd;
use mention_field::editable::TextEditMsg;
use mention_field::messages::Msg;
use mention_field::model::ViewParams;
use mention_field::MentionError;
use serde_json::json;

fn type_into(registry: &mut ViewRegistry<CollectingNotifier>, text: &str) {
    for ch in text.chars() {
        registry
            .dispatch(1, Msg::Edit(TextEditMsg::InsertChar(ch)))
            .unwrap();
    }
}

#[test]
fn test_channel_name() {
    assert_eq!(CHANNEL_NAME, "com.mybusiness/mention_textfield");
}

#[test]
fn test_every_edit_notifies_full_text() {
    let mut registry = test_registry("");
    type_into(&mut registry, "hi @");
    assert_eq!(registry.notifier().texts(), vec!["h", "hi", "hi ", "hi @"]);
}

#[test]
fn test_commit_notifies_encoded_text() {
    let mut registry = test_registry("");
    type_into(&mut registry, "hello @an");
    registry.dispatch(1, Msg::SelectCandidate(0)).unwrap();

    let texts = registry.notifier().texts();
    assert_eq!(texts.last(), Some(&"hello @[Ana](42)"));

    let widget: Vec<&Cmd> = registry.notifier().commands.iter().map(|(_, c)| c).collect();
    assert!(widget.iter().any(|c| matches!(c, Cmd::ShowCandidates(_))));
    assert!(widget.contains(&&Cmd::HideCandidates));
    assert!(widget.contains(&&Cmd::ReplaceText {
        text: "hello @[Ana](42)".into(),
        cursor: 16,
    }));
}

#[test]
fn test_cursor_move_does_not_notify() {
    let mut registry = test_registry("abc");
    registry
        .dispatch(1, Msg::Edit(TextEditMsg::SetCursor(1)))
        .unwrap();
    assert!(registry.notifier().events.is_empty());
}

#[test]
fn test_tap_event() {
    let mut registry = test_registry("");
    registry.dispatch(1, Msg::Tap).unwrap();
    assert_eq!(registry.notifier().events, vec![HostEvent::tap(1)]);
}

#[test]
fn test_set_users_call_reaches_field() {
    let mut registry = test_registry("");
    let call: MethodCall = serde_json::from_value(json!({
        "method": "setUsers",
        "args": {"viewId": 1, "users": [{"id": "8", "name": "Davi"}, {"name": "no id"}, {"id": 9, "name": "Eva"}]}
    }))
    .unwrap();

    let result = MethodResult::from(registry.handle_call(&call));
    assert_eq!(result, MethodResult::Ok(json!(true)));

    let names: Vec<&str> = registry
        .get(1)
        .unwrap()
        .users
        .iter()
        .map(|u| u.display_name.as_str())
        .collect();
    assert_eq!(names, vec!["Davi", "Eva"]);
}

#[test]
fn test_set_users_with_bad_arguments() {
    let mut registry = test_registry("");
    for args in [json!(null), json!({"viewId": 1}), json!({"viewId": "1", "users": []})] {
        let call = MethodCall::new("setUsers", args);
        let result = serde_json::to_value(MethodResult::from(registry.handle_call(&call))).unwrap();
        assert_eq!(result["error"]["code"], "INVALID_ARGUMENT");
    }
}

#[test]
fn test_request_users_returns_empty_list() {
    let mut registry = test_registry("");
    let call = MethodCall::new("requestUsers", json!(null));
    assert_eq!(registry.handle_call(&call), Ok(json!([])));
}

#[test]
fn test_view_lifecycle() {
    let mut registry = test_registry("");
    let params = ViewParams::from_value(&json!({"initialText": "oi @[Ana](42)", "fontSize": 18}));
    let field = registry.create_view(2, &params);
    assert_eq!(field.occurrences().len(), 1);
    assert_eq!(field.style.font_size, 18.0);
    assert_eq!(registry.len(), 2);

    assert!(registry.dispose(2));
    assert_eq!(
        registry.dispatch(2, Msg::Tap),
        Err(MentionError::UnknownView(2))
    );
}

#[test]
fn test_views_are_independent() {
    let mut registry = test_registry("");
    registry.create_view(2, &ViewParams::default());
    type_into(&mut registry, "@");

    assert!(registry.get(1).unwrap().session.is_active());
    assert!(!registry.get(2).unwrap().session.is_active());
}
