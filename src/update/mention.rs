//! Mention commit, candidate selection and host-driven replacements.

use crate::commands::Cmd;
use crate::error::MentionError;
use crate::mention::Entity;
use crate::model::MentionField;

use super::{candidates_cmd, hide_candidates, text_changed_cmds};

/// Commit `entity` for the active query.
///
/// Fails without touching the field when no query is active, the query
/// offsets no longer fit the text, or the entity cannot be encoded.
pub fn update_commit(field: &mut MentionField, entity: Entity) -> Result<Option<Cmd>, MentionError> {
    let splice = field
        .session
        .commit(field.editable.buffer.as_str(), field.editable.cursor(), &entity)?;

    field.editable.set_text(&splice.text, splice.cursor);

    let mut cmds = vec![
        Cmd::ReplaceText {
            text: splice.text,
            cursor: splice.cursor,
        },
        hide_candidates(field),
    ];
    cmds.extend(text_changed_cmds(field));
    Ok(Some(Cmd::batch(cmds)))
}

/// Commit the n-th visible candidate
pub fn update_select_candidate(
    field: &mut MentionField,
    index: usize,
) -> Result<Option<Cmd>, MentionError> {
    if !field.session.is_active() {
        return Err(MentionError::InvalidSessionState(
            "candidate selected without an active mention query".to_string(),
        ));
    }
    let entity = field.candidates.get(index).cloned().ok_or_else(|| {
        MentionError::InvalidArgument(format!(
            "candidate index {} out of range ({} shown)",
            index,
            field.candidates.len()
        ))
    })?;
    update_commit(field, entity)
}

/// Replace the raw text from the host; the cursor goes to the end
pub fn update_set_text(field: &mut MentionField, text: String) -> Option<Cmd> {
    let end = text.chars().count();
    field.editable.set_text(&text, end);
    field.session.reset();

    let mut cmds = vec![hide_candidates(field)];
    cmds.extend(text_changed_cmds(field));
    Some(Cmd::batch(cmds))
}

/// Replace the entity list, re-filtering an active query
pub fn update_set_users(field: &mut MentionField, users: Vec<Entity>) -> Option<Cmd> {
    field.users = users
        .into_iter()
        .filter(|user| match user.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("skipping user: {}", e);
                false
            }
        })
        .collect();
    tracing::debug!(view = field.view_id, count = field.users.len(), "users replaced");

    if !field.session.is_active() {
        return None;
    }
    let text = field.text().to_string();
    let cursor = field.cursor();
    let update = field.session.on_cursor_moved(&text, cursor, &field.users);
    match candidates_cmd(field, update) {
        Cmd::None => None,
        cmd => Some(cmd),
    }
}
