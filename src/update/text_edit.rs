//! Text editing update handler.
//!
//! Applies a TextEditMsg to the field's buffer, then feeds the new text and
//! cursor to the mention session.

use crate::commands::Cmd;
use crate::editable::TextEditMsg;
use crate::model::MentionField;

use super::{candidates_cmd, text_changed_cmds};

/// Handle a TextEditMsg.
///
/// Buffer edits run the full session step and notify; pure cursor or
/// selection changes only re-check the query span.
pub fn update_text_edit(field: &mut MentionField, msg: TextEditMsg) -> Option<Cmd> {
    let selection_start = field.editable.selection().start();
    if !field.editable.apply(&msg) {
        return None;
    }

    let text = field.text().to_string();
    let cursor = field.cursor();

    if msg.is_editing() {
        // Backward deletes land the cursor on the start of what they removed
        let edit_start = selection_start.min(cursor);
        let update = field
            .session
            .on_text_edited(&text, cursor, edit_start, &field.users);
        let mut cmds = vec![candidates_cmd(field, update)];
        cmds.extend(text_changed_cmds(field));
        Some(Cmd::batch(cmds))
    } else {
        let update = field.session.on_cursor_moved(&text, cursor, &field.users);
        match candidates_cmd(field, update) {
            Cmd::None => None,
            cmd => Some(cmd),
        }
    }
}
