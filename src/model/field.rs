//! One embedded mention field: raw text, cursor, session and entity list

use crate::config::FieldConfig;
use crate::editable::{EditableState, StringBuffer, TextBuffer};
use crate::mention::{self, Entity, MentionOccurrence, MentionSession, StyledText};

use super::params::{FieldStyle, ViewParams};

/// Host-assigned identifier of a field view
pub type ViewId = i64;

/// State of one mention field.
///
/// The buffer holds the raw text (markup included) and is the single source
/// of truth. Styling is recomputed from it on demand and never stored.
#[derive(Debug, Clone)]
pub struct MentionField {
    pub view_id: ViewId,
    pub editable: EditableState<StringBuffer>,
    pub session: MentionSession,
    /// Mentionable entities in display priority order
    pub users: Vec<Entity>,
    pub style: FieldStyle,
    /// Candidates currently shown in the dropdown (empty = hidden)
    pub candidates: Vec<Entity>,
}

impl MentionField {
    pub fn new(view_id: ViewId, params: &ViewParams, config: &FieldConfig) -> Self {
        Self {
            view_id,
            editable: EditableState::with_cursor_at_end(StringBuffer::from_text(
                &params.initial_text,
            )),
            session: MentionSession::new(config.empty_result_policy, config.max_candidates),
            users: params.entities(),
            style: params.resolve_style(),
            candidates: Vec::new(),
        }
    }

    /// A field with default appearance and configuration
    pub fn with_text(view_id: ViewId, text: &str, users: Vec<Entity>) -> Self {
        let params = ViewParams {
            initial_text: text.to_string(),
            ..ViewParams::default()
        };
        let mut field = Self::new(view_id, &params, &FieldConfig::default());
        field.users = users;
        field
    }

    /// Raw text, markup included
    pub fn text(&self) -> &str {
        self.editable.buffer.as_str()
    }

    pub fn cursor(&self) -> usize {
        self.editable.cursor()
    }

    pub fn len_chars(&self) -> usize {
        self.editable.buffer.len_chars()
    }

    /// Mention occurrences in the current text
    pub fn occurrences(&self) -> Vec<MentionOccurrence> {
        mention::scan_all(self.text())
    }

    /// Fresh styled projection of the current text
    pub fn styled(&self) -> StyledText {
        mention::render(
            self.text(),
            &self.occurrences(),
            self.style.base(),
            self.style.mention(),
        )
    }

    pub fn candidates_visible(&self) -> bool {
        !self.candidates.is_empty()
    }
}
