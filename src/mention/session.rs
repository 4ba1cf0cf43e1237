//! Mention session state machine.
//!
//! Tracks whether the user is composing a mention query, derives the live
//! query from raw text and the cursor, and splices a committed entity into
//! the text. All offsets are char offsets.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::filter::filter_limited;
use super::parser::{self, mention_at};
use crate::error::MentionError;
use crate::util::text::{char_at, char_before, char_len, clamp_offset, ends_query, slice_chars};

/// What to do when a query stops matching any entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyResultPolicy {
    /// Leave the query; the mention attempt is over
    #[default]
    EndSession,
    /// Stay in the query so a later keystroke can match again
    KeepQuerying,
}

/// Whether a mention query is in progress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Querying {
        /// Offset right after the triggering `@`
        query_start: usize,
        current_query: String,
    },
}

impl SessionState {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Querying { .. })
    }

    pub fn query_start(&self) -> Option<usize> {
        match self {
            SessionState::Idle => None,
            SessionState::Querying { query_start, .. } => Some(*query_start),
        }
    }

    pub fn current_query(&self) -> Option<&str> {
        match self {
            SessionState::Idle => None,
            SessionState::Querying { current_query, .. } => Some(current_query),
        }
    }
}

/// How the candidate list should change after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// Nothing to show or hide
    None,
    /// Show these candidates, in display order
    Show(Vec<Entity>),
    /// Hide the candidate list
    Hide,
}

/// Result of a commit: the new raw text and where the cursor goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub text: String,
    pub cursor: usize,
}

/// The query-tracking state machine for one field
#[derive(Debug, Clone, Default)]
pub struct MentionSession {
    state: SessionState,
    pub policy: EmptyResultPolicy,
    /// Maximum number of candidates shown (None = unlimited)
    pub max_candidates: Option<usize>,
}

impl MentionSession {
    pub fn new(policy: EmptyResultPolicy, max_candidates: Option<usize>) -> Self {
        Self {
            state: SessionState::Idle,
            policy,
            max_candidates,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Drop any in-progress query
    pub fn reset(&mut self) {
        if self.state.is_active() {
            tracing::debug!(target: "mention", "query reset");
        }
        self.state = SessionState::Idle;
    }

    /// React to an edit that produced `text` with the cursor at `cursor`
    pub fn on_text_changed(&mut self, text: &str, cursor: usize, entities: &[Entity]) -> SessionUpdate {
        let cursor = clamp_offset(text, cursor);
        if self.state.is_active() {
            return self.track_query(text, cursor, entities);
        }

        if !is_trigger(text, cursor) {
            return SessionUpdate::None;
        }

        tracing::debug!(target: "mention", query_start = cursor, "query started");
        self.state = SessionState::Querying {
            query_start: cursor,
            current_query: String::new(),
        };
        self.refresh(entities)
    }

    /// React to an edit whose replaced range started at char `edit_start`.
    ///
    /// An edit that starts before the query span may have moved or removed
    /// its `@`, so the old anchor is dropped and the text is judged afresh,
    /// exactly as if it had been typed.
    pub fn on_text_edited(
        &mut self,
        text: &str,
        cursor: usize,
        edit_start: usize,
        entities: &[Entity],
    ) -> SessionUpdate {
        let anchor_lost = self
            .state
            .query_start()
            .map_or(false, |query_start| edit_start < query_start);
        if !anchor_lost {
            return self.on_text_changed(text, cursor, entities);
        }

        tracing::debug!(target: "mention", edit_start, "edit before query span");
        self.state = SessionState::Idle;
        match self.on_text_changed(text, cursor, entities) {
            SessionUpdate::None => SessionUpdate::Hide,
            update => update,
        }
    }

    /// React to a selection change that did not modify the text.
    ///
    /// Never starts a query.
    pub fn on_cursor_moved(&mut self, text: &str, cursor: usize, entities: &[Entity]) -> SessionUpdate {
        if !self.state.is_active() {
            return SessionUpdate::None;
        }
        let cursor = clamp_offset(text, cursor);
        self.track_query(text, cursor, entities)
    }

    /// Replace the query span (and its `@`) with the entity's token.
    ///
    /// On error nothing changes: neither the session nor the caller's text.
    pub fn commit(&mut self, text: &str, cursor: usize, entity: &Entity) -> Result<Splice, MentionError> {
        let SessionState::Querying { query_start, .. } = self.state else {
            return Err(MentionError::InvalidSessionState(
                "commit without an active mention query".to_string(),
            ));
        };
        entity.validate()?;

        let len = char_len(text);
        let cursor = cursor.min(len);
        if query_start == 0 || query_start > len {
            return Err(MentionError::InvalidSessionState(format!(
                "query start {} outside text of length {}",
                query_start, len
            )));
        }
        if cursor < query_start {
            return Err(MentionError::InvalidSessionState(format!(
                "cursor {} before query start {}",
                cursor, query_start
            )));
        }
        if char_at(text, query_start - 1) != Some('@') {
            return Err(MentionError::InvalidSessionState(format!(
                "no '@' before query start {}",
                query_start
            )));
        }
        if mention_at(text, query_start - 1).is_some() {
            return Err(MentionError::InvalidSessionState(format!(
                "query at {} overlaps an existing mention",
                query_start
            )));
        }

        let before = slice_chars(text, 0..query_start - 1);
        let after = slice_chars(text, cursor..len);
        let token = parser::format(entity);

        let new_cursor = char_len(before) + char_len(&token);
        let mut spliced = String::with_capacity(before.len() + token.len() + after.len());
        spliced.push_str(before);
        spliced.push_str(&token);
        spliced.push_str(after);

        tracing::debug!(target: "mention", entity = %entity.id, cursor = new_cursor, "mention committed");
        self.state = SessionState::Idle;
        Ok(Splice {
            text: spliced,
            cursor: new_cursor,
        })
    }

    /// Re-derive the query while `Querying`
    fn track_query(&mut self, text: &str, cursor: usize, entities: &[Entity]) -> SessionUpdate {
        let Some(query_start) = self.state.query_start() else {
            return SessionUpdate::None;
        };

        if cursor < query_start || char_before(text, query_start) != Some('@') {
            tracing::debug!(target: "mention", cursor, query_start, "cursor left query span");
            self.state = SessionState::Idle;
            return SessionUpdate::Hide;
        }
        if mention_at(text, query_start - 1).is_some() {
            tracing::debug!(target: "mention", query_start, "query span became a mention");
            self.state = SessionState::Idle;
            return SessionUpdate::Hide;
        }

        let query = slice_chars(text, query_start..cursor);
        if query.chars().any(ends_query) {
            tracing::debug!(target: "mention", %query, "query ended by whitespace");
            self.state = SessionState::Idle;
            return SessionUpdate::Hide;
        }

        self.state = SessionState::Querying {
            query_start,
            current_query: query.to_string(),
        };
        self.refresh(entities)
    }

    /// Filter for the current query and apply the empty-result policy
    fn refresh(&mut self, entities: &[Entity]) -> SessionUpdate {
        let query = self.state.current_query().unwrap_or_default();
        let found = filter_limited(entities, query, self.max_candidates);
        if !found.is_empty() {
            return SessionUpdate::Show(found.into_iter().cloned().collect());
        }

        if self.policy == EmptyResultPolicy::EndSession {
            tracing::debug!(target: "mention", %query, "no candidates, query ended");
            self.state = SessionState::Idle;
        }
        SessionUpdate::Hide
    }
}

/// An `@` just before `cursor` opens a query when it starts the text or
/// follows whitespace, and is not the `@` of an existing token.
fn is_trigger(text: &str, cursor: usize) -> bool {
    if cursor == 0 || char_before(text, cursor) != Some('@') {
        return false;
    }
    let at = cursor - 1;
    let boundary = char_before(text, at).map_or(true, char::is_whitespace);
    boundary && mention_at(text, at).is_none()
}
