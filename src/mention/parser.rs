//! Mention token grammar: scanning, formatting and rendering.
//!
//! A mention token is `@[displayName](entityId)`. This module is the only
//! place the grammar is defined; [`format`] and [`scan`] must stay in
//! agreement.

use std::sync::OnceLock;

use regex::Regex;

use super::entity::{Entity, MentionOccurrence};
use super::style::{StyleSpan, StyledText, TextStyle};

/// Token pattern: group 1 is the display name, group 2 the entity id
pub const MENTION_PATTERN: &str = r"@\[([^\]]+)\]\(([^)]+)\)";

fn mention_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(MENTION_PATTERN).expect("mention pattern is valid"))
}

/// Lazy left-to-right scan over the mention tokens in a text.
///
/// Cloning restarts from the clone point; [`scan`] again restarts from the
/// beginning. Offsets are reported in chars.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    text: &'a str,
    /// Byte offset where the next search starts
    byte_pos: usize,
    /// Char offset matching `byte_pos`
    char_pos: usize,
}

impl<'a> Iterator for Occurrences<'a> {
    type Item = MentionOccurrence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.byte_pos >= self.text.len() {
            return None;
        }
        let caps = mention_regex().captures_at(self.text, self.byte_pos)?;
        let whole = caps.get(0)?;
        let name = caps.get(1)?;
        let id = caps.get(2)?;

        let start = self.char_pos + self.text[self.byte_pos..whole.start()].chars().count();
        let end = start + whole.as_str().chars().count();

        self.byte_pos = whole.end();
        self.char_pos = end;

        Some(MentionOccurrence {
            start,
            end,
            entity_id: id.as_str().to_string(),
            display_name: name.as_str().to_string(),
        })
    }
}

impl std::iter::FusedIterator for Occurrences<'_> {}

/// Scan `text` for mention tokens
pub fn scan(text: &str) -> Occurrences<'_> {
    Occurrences {
        text,
        byte_pos: 0,
        char_pos: 0,
    }
}

/// Scan and collect every occurrence
pub fn scan_all(text: &str) -> Vec<MentionOccurrence> {
    scan(text).collect()
}

/// Encode an entity as a mention token.
///
/// Does not sanitize; see [`Entity::validate`].
pub fn format(entity: &Entity) -> String {
    format!("@[{}]({})", entity.display_name, entity.id)
}

/// Build the styled projection of `text`.
///
/// `base` covers the whole text, then `mention` overlays each occurrence.
pub fn render(
    text: &str,
    occurrences: &[MentionOccurrence],
    base: TextStyle,
    mention: TextStyle,
) -> StyledText {
    let len = text.chars().count();
    let mut spans = Vec::with_capacity(occurrences.len() + 1);
    if len > 0 {
        spans.push(StyleSpan {
            range: 0..len,
            style: base,
        });
    }
    spans.extend(
        occurrences
            .iter()
            .filter(|occ| occ.end <= len)
            .map(|occ| StyleSpan {
                range: occ.range(),
                style: mention,
            }),
    );
    StyledText {
        text: text.to_string(),
        spans,
    }
}

/// The occurrence covering char `offset`, if any
pub fn mention_at(text: &str, offset: usize) -> Option<MentionOccurrence> {
    scan(text)
        .take_while(|occ| occ.start <= offset)
        .find(|occ| occ.contains(offset))
}

/// Replace every token with `@displayName`
pub fn plain_text(text: &str) -> String {
    mention_regex().replace_all(text, "@$1").into_owned()
}

/// Entity ids referenced by `text`, in first-appearance order, without duplicates
pub fn mentioned_ids(text: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for occ in scan(text) {
        if !ids.contains(&occ.entity_id) {
            ids.push(occ.entity_id);
        }
    }
    ids
}
