//! Update functions for the Elm-style architecture
//!
//! All state transformations of a mention field flow through these
//! functions. Each message is processed to completion, restyle and
//! notifications included, before the next one.

mod mention;
mod text_edit;

use crate::commands::Cmd;
use crate::error::MentionError;
use crate::messages::Msg;
use crate::model::MentionField;
use crate::mention::SessionUpdate;

#[cfg(debug_assertions)]
use crate::tracing::SessionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use mention::{update_commit, update_select_candidate, update_set_text, update_set_users};
pub use text_edit::update_text_edit;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// On error the field is left exactly as it was.
#[inline]
pub fn update(field: &mut MentionField, msg: Msg) -> Result<Option<Cmd>, MentionError> {
    #[cfg(debug_assertions)]
    {
        update_traced(field, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(field, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(field: &mut MentionField, msg: Msg) -> Result<Option<Cmd>, MentionError> {
    match msg {
        Msg::Edit(edit) => Ok(text_edit::update_text_edit(field, edit)),
        Msg::SetText(text) => Ok(mention::update_set_text(field, text)),
        Msg::SetUsers(users) => Ok(mention::update_set_users(field, users)),
        Msg::SelectCandidate(index) => mention::update_select_candidate(field, index),
        Msg::Commit(entity) => mention::update_commit(field, entity),
        Msg::Tap => Ok(Some(Cmd::NotifyTap)),
    }
}

/// Apply a session update to the visible candidate list
pub(crate) fn candidates_cmd(field: &mut MentionField, update: SessionUpdate) -> Cmd {
    match update {
        SessionUpdate::None => Cmd::None,
        SessionUpdate::Show(list) => {
            field.candidates = list.clone();
            Cmd::ShowCandidates(list)
        }
        SessionUpdate::Hide => hide_candidates(field),
    }
}

/// Hide the candidate list if it is visible
pub(crate) fn hide_candidates(field: &mut MentionField) -> Cmd {
    if field.candidates.is_empty() {
        return Cmd::None;
    }
    field.candidates.clear();
    Cmd::HideCandidates
}

/// Restyle and notify: the tail of every accepted text change
pub(crate) fn text_changed_cmds(field: &MentionField) -> [Cmd; 2] {
    [
        Cmd::Restyle(field.styled()),
        Cmd::NotifyTextChanged(field.text().to_string()),
    ]
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after session state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(field: &mut MentionField, msg: Msg) -> Result<Option<Cmd>, MentionError> {
    let msg_name = format!("{:?}", msg);
    let _span = span!(Level::DEBUG, "update", view = field.view_id, msg = %msg_name).entered();

    let before = SessionSnapshot::from_field(field);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(field, msg);

    let after = SessionSnapshot::from_field(field);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "session", %diff, "state changed");
    }
    if let Err(ref e) = result {
        debug!(target: "session", error = %e, "update rejected");
    }

    result
}
