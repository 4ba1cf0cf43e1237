//! Mentionable entities and parsed mention occurrences.

use serde::{Deserialize, Serialize};

use crate::error::MentionError;

/// A mentionable user. Identity is the `id`.
///
/// On the wire the display name travels as `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(rename = "name", alias = "displayName")]
    pub display_name: String,
}

impl Entity {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Check that this entity can round-trip through a mention token.
    ///
    /// The token grammar has no escaping, so the display name must not contain
    /// `]` and the id must not contain `)`. Neither may be empty.
    pub fn validate(&self) -> Result<(), MentionError> {
        if self.display_name.is_empty() {
            return Err(MentionError::Encoding(format!(
                "entity {:?} has an empty display name",
                self.id
            )));
        }
        if self.display_name.contains(']') {
            return Err(MentionError::Encoding(format!(
                "display name {:?} contains ']'",
                self.display_name
            )));
        }
        if self.id.is_empty() {
            return Err(MentionError::Encoding(format!(
                "entity {:?} has an empty id",
                self.display_name
            )));
        }
        if self.id.contains(')') {
            return Err(MentionError::Encoding(format!(
                "id {:?} contains ')'",
                self.id
            )));
        }
        Ok(())
    }

    pub fn is_encodable(&self) -> bool {
        self.validate().is_ok()
    }
}

/// A located mention token inside one snapshot of raw text.
///
/// Offsets are char offsets, `start < end`, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MentionOccurrence {
    pub start: usize,
    pub end: usize,
    pub entity_id: String,
    pub display_name: String,
}

impl MentionOccurrence {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` falls inside `[start, end)`
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}
