//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use mention_field::bridge::{CollectingNotifier, ViewRegistry};
use mention_field::commands::Cmd;
use mention_field::config::FieldConfig;
use mention_field::editable::TextEditMsg;
use mention_field::mention::Entity;
use mention_field::messages::Msg;
use mention_field::model::{MentionField, UserEntry, ViewParams};
use mention_field::update::update;

/// The entity list most tests use, in priority order
pub fn test_users() -> Vec<Entity> {
    vec![
        Entity::new("42", "Ana"),
        Entity::new("7", "Bruno"),
        Entity::new("13", "Anabela"),
        Entity::new("99", "Carla Dias"),
    ]
}

/// Create a field with the given raw text and the cursor at `cursor`
pub fn test_field(text: &str, cursor: usize) -> MentionField {
    let mut field = MentionField::with_text(1, text, test_users());
    field.editable.set_cursor(cursor);
    field
}

/// Create a field with a specific config
pub fn test_field_with_config(text: &str, config: &FieldConfig) -> MentionField {
    let params = ViewParams {
        initial_text: text.to_string(),
        users: test_users()
            .iter()
            .map(|u| UserEntry::new(&u.id, &u.display_name))
            .collect(),
        ..ViewParams::default()
    };
    MentionField::new(1, &params, config)
}

/// Run a message and return the flattened commands
pub fn send(field: &mut MentionField, msg: Msg) -> Vec<Cmd> {
    update(field, msg)
        .expect("update rejected")
        .map(Cmd::flatten)
        .unwrap_or_default()
}

/// Type `text` one char at a time, returning the commands of the last keystroke
pub fn type_text(field: &mut MentionField, text: &str) -> Vec<Cmd> {
    let mut last = Vec::new();
    for ch in text.chars() {
        last = send(field, Msg::Edit(TextEditMsg::InsertChar(ch)));
    }
    last
}

/// Display names of the last `ShowCandidates` in `cmds`
pub fn shown_names(cmds: &[Cmd]) -> Option<Vec<String>> {
    cmds.iter().rev().find_map(|cmd| match cmd {
        Cmd::ShowCandidates(list) => {
            Some(list.iter().map(|e| e.display_name.clone()).collect())
        }
        _ => None,
    })
}

/// Registry with one view (id 1) holding `text` and the test users
pub fn test_registry(text: &str) -> ViewRegistry<CollectingNotifier> {
    let mut registry = ViewRegistry::new(FieldConfig::default(), CollectingNotifier::new());
    let params = ViewParams {
        initial_text: text.to_string(),
        users: test_users()
            .iter()
            .map(|u| UserEntry::new(&u.id, &u.display_name))
            .collect(),
        ..ViewParams::default()
    };
    registry.create_view(1, &params);
    registry
}
