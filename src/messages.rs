//! Message types for the Elm-style architecture
//!
//! All state changes of a mention field flow through these message types.

use serde::{Deserialize, Serialize};

use crate::editable::TextEditMsg;
use crate::mention::Entity;

/// Top-level message for one mention field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Msg {
    /// Host input translated to an editing operation
    Edit(TextEditMsg),
    /// Replace the raw text (cursor goes to the end); ends any query
    SetText(String),
    /// Replace the entity list
    SetUsers(Vec<Entity>),
    /// The user picked the n-th visible candidate
    SelectCandidate(usize),
    /// Commit a specific entity for the active query
    Commit(Entity),
    /// Bare tap/focus on the field
    Tap,
}
