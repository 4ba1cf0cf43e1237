//! View construction parameters sent by the embedding host

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mention::{Entity, TextStyle};
use crate::theme::{
    Color, DEFAULT_BACKGROUND_COLOR, DEFAULT_MENTION_COLOR, DEFAULT_TEXT_COLOR, HINT_COLOR,
};

pub const DEFAULT_FONT_SIZE: f64 = 14.0;
pub const DEFAULT_HINT_TEXT: &str = "Digite o texto...";

/// A user entry as it arrives from the host; either field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl UserEntry {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
        }
    }

    /// Read an entry from an untyped host map; numeric ids are accepted
    pub fn from_value(value: &Value) -> Self {
        let id = value.get("id").and_then(|id| match id {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        Self {
            id,
            name: value.get("name").and_then(Value::as_str).map(str::to_string),
        }
    }
}

/// Turn host user entries into entities.
///
/// Entries missing a field, or that cannot be encoded as a mention token,
/// are skipped.
pub fn entities_from_entries(entries: &[UserEntry]) -> Vec<Entity> {
    entries
        .iter()
        .filter_map(|entry| match (&entry.id, &entry.name) {
            (Some(id), Some(name)) => Some(Entity::new(id.clone(), name.clone())),
            _ => {
                tracing::warn!(?entry, "skipping user entry without id or name");
                None
            }
        })
        .filter(|entity| match entity.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("skipping user: {}", e);
                false
            }
        })
        .collect()
}

/// Creation parameters for one mention field view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewParams {
    #[serde(default)]
    pub initial_text: String,
    #[serde(default)]
    pub users: Vec<UserEntry>,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_mention_color")]
    pub mention_color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_hint_text")]
    pub hint_text: String,
}

fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_hex()
}

fn default_mention_color() -> String {
    DEFAULT_MENTION_COLOR.to_hex()
}

fn default_background_color() -> String {
    DEFAULT_BACKGROUND_COLOR.to_hex()
}

fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE
}

fn default_hint_text() -> String {
    DEFAULT_HINT_TEXT.to_string()
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            initial_text: String::new(),
            users: Vec::new(),
            text_color: default_text_color(),
            mention_color: default_mention_color(),
            background_color: default_background_color(),
            font_size: default_font_size(),
            hint_text: default_hint_text(),
        }
    }
}

impl ViewParams {
    /// Read parameters from an untyped host map.
    ///
    /// Unlike `Deserialize`, a field of the wrong type is ignored and takes
    /// its default instead of rejecting the whole map.
    pub fn from_value(value: &Value) -> Self {
        let mut params = Self::default();
        let Some(map) = value.as_object() else {
            return params;
        };

        let string = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);

        if let Some(text) = string("initialText") {
            params.initial_text = text;
        }
        if let Some(users) = map.get("users").and_then(Value::as_array) {
            params.users = users.iter().map(UserEntry::from_value).collect();
        }
        if let Some(color) = string("textColor") {
            params.text_color = color;
        }
        if let Some(color) = string("mentionColor") {
            params.mention_color = color;
        }
        if let Some(color) = string("backgroundColor") {
            params.background_color = color;
        }
        if let Some(size) = map.get("fontSize").and_then(Value::as_f64) {
            params.font_size = size;
        }
        if let Some(hint) = string("hintText") {
            params.hint_text = hint;
        }
        params
    }

    /// Resolve color strings and sizes into a style, failing closed to defaults
    pub fn resolve_style(&self) -> FieldStyle {
        let font_size = if self.font_size.is_finite() && self.font_size > 0.0 {
            self.font_size as f32
        } else {
            DEFAULT_FONT_SIZE as f32
        };
        FieldStyle {
            text_color: Color::parse_or(&self.text_color, DEFAULT_TEXT_COLOR),
            mention_color: Color::parse_or(&self.mention_color, DEFAULT_MENTION_COLOR),
            background_color: Color::parse_or(&self.background_color, DEFAULT_BACKGROUND_COLOR),
            hint_color: HINT_COLOR,
            font_size,
            hint_text: self.hint_text.clone(),
        }
    }

    pub fn entities(&self) -> Vec<Entity> {
        entities_from_entries(&self.users)
    }
}

/// Resolved appearance of a field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStyle {
    pub text_color: Color,
    pub mention_color: Color,
    pub background_color: Color,
    pub hint_color: Color,
    pub font_size: f32,
    pub hint_text: String,
}

impl FieldStyle {
    /// Style of plain text
    pub fn base(&self) -> TextStyle {
        TextStyle::new(self.text_color, self.font_size)
    }

    /// Style of mention tokens
    pub fn mention(&self) -> TextStyle {
        TextStyle::new(self.mention_color, self.font_size).bold()
    }
}

impl Default for FieldStyle {
    fn default() -> Self {
        ViewParams::default().resolve_style()
    }
}
