//! Mention session lifecycle tests - trigger, filter, commit, cancel

mod common;

use common::{send, shown_names, test_field, test_field_with_config, type_text};
use mention_field::commands::Cmd;
use mention_field::config::FieldConfig;
use mention_field::editable::{MoveTarget, TextEditMsg};
use mention_field::mention::{EmptyResultPolicy, Entity, SessionState};
use mention_field::messages::Msg;
use mention_field::update::update;
use mention_field::MentionError;

// ========================================================================
// Trigger tests
// ========================================================================

#[test]
fn test_at_after_space_starts_query() {
    let mut field = test_field("", 0);
    let cmds = type_text(&mut field, "hello @");

    assert_eq!(
        field.session.state(),
        &SessionState::Querying {
            query_start: 7,
            current_query: String::new(),
        }
    );
    assert_eq!(
        shown_names(&cmds).unwrap(),
        vec!["Ana", "Bruno", "Anabela", "Carla Dias"]
    );
    assert!(cmds.contains(&Cmd::NotifyTextChanged("hello @".into())));
}

#[test]
fn test_at_at_text_start_starts_query() {
    let mut field = test_field("", 0);
    type_text(&mut field, "@");
    assert!(field.session.is_active());
    assert!(field.candidates_visible());
}

#[test]
fn test_at_inside_word_does_not_start_query() {
    let mut field = test_field("", 0);
    let cmds = type_text(&mut field, "email@");
    assert!(!field.session.is_active());
    assert!(shown_names(&cmds).is_none());
}

#[test]
fn test_cursor_move_never_starts_query() {
    let mut field = test_field("hi @", 2);
    let cmds = send(&mut field, Msg::Edit(TextEditMsg::Move(MoveTarget::LineEnd)));
    assert_eq!(field.cursor(), 4);
    assert!(!field.session.is_active());
    assert!(cmds.is_empty());
}

// ========================================================================
// Filtering tests
// ========================================================================

#[test]
fn test_query_narrows_candidates() {
    let mut field = test_field("", 0);
    type_text(&mut field, "@");

    let cmds = type_text(&mut field, "a");
    assert_eq!(
        shown_names(&cmds).unwrap(),
        vec!["Ana", "Anabela", "Carla Dias"]
    );

    let cmds = type_text(&mut field, "n");
    assert_eq!(shown_names(&cmds).unwrap(), vec!["Ana", "Anabela"]);
    assert_eq!(field.session.state().current_query(), Some("an"));
}

#[test]
fn test_filter_is_case_insensitive() {
    let mut field = test_field("", 0);
    let cmds = type_text(&mut field, "@BRU");
    assert_eq!(shown_names(&cmds).unwrap(), vec!["Bruno"]);
}

#[test]
fn test_max_candidates_limits_list() {
    let config = FieldConfig {
        max_candidates: Some(1),
        ..FieldConfig::default()
    };
    let mut field = test_field_with_config("", &config);
    let cmds = type_text(&mut field, "@");
    assert_eq!(shown_names(&cmds).unwrap(), vec!["Ana"]);
}

#[test]
fn test_set_users_refilters_active_query() {
    let mut field = test_field("", 0);
    type_text(&mut field, "@b");

    let cmds = send(
        &mut field,
        Msg::SetUsers(vec![Entity::new("5", "Bia"), Entity::new("6", "Carlos")]),
    );
    assert_eq!(shown_names(&cmds).unwrap(), vec!["Bia"]);
    assert_eq!(field.users.len(), 2);
}

#[test]
fn test_set_users_drops_unencodable() {
    let mut field = test_field("", 0);
    let cmds = send(
        &mut field,
        Msg::SetUsers(vec![Entity::new("5", "Bia"), Entity::new("6", "Bad]Name")]),
    );
    assert!(cmds.is_empty());
    assert_eq!(field.users, vec![Entity::new("5", "Bia")]);
}

// ========================================================================
// Ending a query
// ========================================================================

#[test]
fn test_whitespace_ends_query() {
    let mut field = test_field("", 0);
    type_text(&mut field, "@an");

    let cmds = type_text(&mut field, " ");
    assert!(!field.session.is_active());
    assert!(cmds.contains(&Cmd::HideCandidates));
    assert!(!field.candidates_visible());
}

#[test]
fn test_deleting_at_ends_query() {
    let mut field = test_field("", 0);
    type_text(&mut field, "hi @");

    let cmds = send(&mut field, Msg::Edit(TextEditMsg::DeleteBackward));
    assert_eq!(field.text(), "hi ");
    assert!(!field.session.is_active());
    assert!(cmds.contains(&Cmd::HideCandidates));
}

#[test]
fn test_cursor_leaving_span_ends_query() {
    let mut field = test_field("", 0);
    type_text(&mut field, "hi @an");

    // Moving inside the query re-filters
    let cmds = send(&mut field, Msg::Edit(TextEditMsg::Move(MoveTarget::Left)));
    assert_eq!(field.session.state().current_query(), Some("a"));
    assert_eq!(
        shown_names(&cmds).unwrap(),
        vec!["Ana", "Anabela", "Carla Dias"]
    );

    let cmds = send(
        &mut field,
        Msg::Edit(TextEditMsg::Move(MoveTarget::DocumentStart)),
    );
    assert!(!field.session.is_active());
    assert_eq!(cmds, vec![Cmd::HideCandidates]);
}

#[test]
fn test_set_text_ends_query() {
    let mut field = test_field("", 0);
    type_text(&mut field, "@a");

    let cmds = send(&mut field, Msg::SetText("new text".into()));
    assert!(!field.session.is_active());
    assert_eq!(field.cursor(), 8);
    assert_eq!(cmds[0], Cmd::HideCandidates);
    assert_eq!(
        cmds.last(),
        Some(&Cmd::NotifyTextChanged("new text".into()))
    );
}

#[test]
fn test_replacing_text_before_query_ends_it() {
    let mut field = test_field("", 0);
    type_text(&mut field, "hi @b");
    assert!(field.candidates_visible());

    send(&mut field, Msg::Edit(TextEditMsg::SelectAll));
    let cmds = send(&mut field, Msg::Edit(TextEditMsg::InsertText("xyz@an".into())));

    assert_eq!(field.text(), "xyz@an");
    assert!(!field.session.is_active());
    assert!(cmds.contains(&Cmd::HideCandidates));
    assert!(shown_names(&cmds).is_none());
}

#[test]
fn test_replacement_ending_in_at_opens_fresh_query() {
    let mut field = test_field("", 0);
    type_text(&mut field, "hi @b");

    send(&mut field, Msg::Edit(TextEditMsg::SelectAll));
    let cmds = send(&mut field, Msg::Edit(TextEditMsg::InsertText("ok @".into())));

    assert_eq!(field.session.state().query_start(), Some(4));
    assert_eq!(shown_names(&cmds).unwrap().len(), 4);
}

#[test]
fn test_replacing_query_with_token_protects_it() {
    let config = FieldConfig {
        empty_result_policy: EmptyResultPolicy::KeepQuerying,
        ..FieldConfig::default()
    };
    let mut field = test_field_with_config("", &config);
    type_text(&mut field, "a @b");

    send(&mut field, Msg::Edit(TextEditMsg::SelectAll));
    send(
        &mut field,
        Msg::Edit(TextEditMsg::InsertText("a @[Bruno](7)".into())),
    );
    assert!(!field.session.is_active());

    let result = update(&mut field, Msg::Commit(Entity::new("42", "Ana")));
    assert!(matches!(result, Err(MentionError::InvalidSessionState(_))));
    assert_eq!(field.text(), "a @[Bruno](7)");
}

// ========================================================================
// Empty result policy
// ========================================================================

#[test]
fn test_empty_result_ends_session_by_default() {
    let mut field = test_field("", 0);
    type_text(&mut field, "@z");
    assert!(!field.session.is_active());
    assert!(!field.candidates_visible());

    // Further typing does not resume the query
    let cmds = type_text(&mut field, "a");
    assert!(!field.session.is_active());
    assert!(shown_names(&cmds).is_none());
}

#[test]
fn test_empty_result_keep_querying() {
    let config = FieldConfig {
        empty_result_policy: EmptyResultPolicy::KeepQuerying,
        ..FieldConfig::default()
    };
    let mut field = test_field_with_config("", &config);
    type_text(&mut field, "@z");
    assert!(field.session.is_active());
    assert!(!field.candidates_visible());

    // Erasing the bad char brings the full list back
    let cmds = send(&mut field, Msg::Edit(TextEditMsg::DeleteBackward));
    assert_eq!(shown_names(&cmds).unwrap().len(), 4);
}

// ========================================================================
// Commit tests
// ========================================================================

#[test]
fn test_commit_replaces_at_and_query() {
    let mut field = test_field("", 0);
    type_text(&mut field, "hello @");

    let cmds = send(&mut field, Msg::Commit(Entity::new("42", "Ana")));
    assert_eq!(field.text(), "hello @[Ana](42)");
    assert_eq!(field.cursor(), 16);
    assert!(!field.session.is_active());
    assert_eq!(
        cmds[0],
        Cmd::ReplaceText {
            text: "hello @[Ana](42)".into(),
            cursor: 16,
        }
    );
    assert!(cmds.contains(&Cmd::HideCandidates));
    assert!(cmds.contains(&Cmd::NotifyTextChanged("hello @[Ana](42)".into())));
}

#[test]
fn test_select_candidate_commits_visible_entry() {
    let mut field = test_field("", 0);
    type_text(&mut field, "@an");

    send(&mut field, Msg::SelectCandidate(1));
    assert_eq!(field.text(), "@[Anabela](13)");
    assert_eq!(field.occurrences().len(), 1);
    assert_eq!(field.occurrences()[0].entity_id, "13");
}

#[test]
fn test_commit_mid_text_keeps_tail() {
    let mut field = test_field("hi  there", 3);
    type_text(&mut field, "@an");
    assert_eq!(field.text(), "hi @an there");

    send(&mut field, Msg::Commit(Entity::new("42", "Ana")));
    assert_eq!(field.text(), "hi @[Ana](42) there");
    assert_eq!(field.cursor(), 13);
}

#[test]
fn test_commit_without_query_is_rejected() {
    let mut field = test_field("hello", 5);
    let result = update(&mut field, Msg::Commit(Entity::new("42", "Ana")));
    assert!(matches!(result, Err(MentionError::InvalidSessionState(_))));
    assert_eq!(field.text(), "hello");
}

#[test]
fn test_select_candidate_out_of_range() {
    let mut field = test_field("", 0);
    type_text(&mut field, "@an");
    let result = update(&mut field, Msg::SelectCandidate(5));
    assert!(matches!(result, Err(MentionError::InvalidArgument(_))));
    assert!(field.session.is_active());
}

#[test]
fn test_commit_unencodable_entity_leaves_field() {
    let mut field = test_field("", 0);
    type_text(&mut field, "@a");
    let result = update(&mut field, Msg::Commit(Entity::new("1", "A]b")));
    assert!(matches!(result, Err(MentionError::Encoding(_))));
    assert_eq!(field.text(), "@a");
    assert!(field.session.is_active());
}

#[test]
fn test_second_mention_after_first() {
    let mut field = test_field("", 0);
    type_text(&mut field, "@an");
    send(&mut field, Msg::SelectCandidate(0));
    type_text(&mut field, " e @br");
    send(&mut field, Msg::SelectCandidate(0));

    assert_eq!(field.text(), "@[Ana](42) e @[Bruno](7)");
    let ids: Vec<_> = field.occurrences().into_iter().map(|o| o.entity_id).collect();
    assert_eq!(ids, vec!["42", "7"]);
}

#[test]
fn test_tap_notifies() {
    let mut field = test_field("", 0);
    let cmds = send(&mut field, Msg::Tap);
    assert_eq!(cmds, vec![Cmd::NotifyTap]);
}
