//! EditableState - editable text with a single cursor and selection.

use crate::util::{char_type, CharType};

use super::buffer::{TextBuffer, TextBufferMut};
use super::messages::{MoveTarget, TextEditMsg};
use super::selection::Selection;

/// Editable text with one cursor and its selection.
///
/// The cursor is always the selection head.
#[derive(Debug, Clone, Default)]
pub struct EditableState<B: TextBuffer> {
    /// The text buffer
    pub buffer: B,
    selection: Selection,
}

impl<B: TextBuffer> EditableState<B> {
    /// Create a new EditableState with the cursor at the start
    pub fn new(buffer: B) -> Self {
        Self {
            buffer,
            selection: Selection::collapsed(0),
        }
    }

    /// Create a new EditableState with the cursor at the end of the text
    pub fn with_cursor_at_end(buffer: B) -> Self {
        let end = buffer.len_chars();
        Self {
            buffer,
            selection: Selection::collapsed(end),
        }
    }

    /// Cursor char offset
    pub fn cursor(&self) -> usize {
        self.selection.head
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Get the text content as a String
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        if self.selection.is_empty() {
            return String::new();
        }
        self.buffer.slice(self.selection.range())
    }

    /// Check if there is a non-empty selection
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Place the cursor, collapsing the selection. Clamped to the text.
    pub fn set_cursor(&mut self, offset: usize) {
        let offset = offset.min(self.buffer.len_chars());
        self.selection = Selection::collapsed(offset);
    }

    /// Collapse selection to cursor position
    pub fn collapse_selection(&mut self) {
        self.selection.collapse();
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.buffer.len_chars());
    }

    fn place(&mut self, offset: usize, extend_selection: bool) {
        if extend_selection {
            self.selection.extend_to(offset);
        } else {
            self.selection = Selection::collapsed(offset);
        }
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl<B: TextBuffer> EditableState<B> {
    /// Move the cursor. Returns true if cursor or selection changed.
    pub fn move_to(&mut self, target: MoveTarget, extend_selection: bool) -> bool {
        let before = self.selection;

        // Collapse an existing selection to its edge instead of moving
        if !extend_selection && !self.selection.is_empty() {
            match target {
                MoveTarget::Left => {
                    let start = self.selection.start();
                    self.selection = Selection::collapsed(start);
                    return true;
                }
                MoveTarget::Right => {
                    let end = self.selection.end();
                    self.selection = Selection::collapsed(end);
                    return true;
                }
                _ => {}
            }
        }

        let cursor = self.cursor();
        let len = self.buffer.len_chars();
        let offset = match target {
            MoveTarget::Left => cursor.saturating_sub(1),
            MoveTarget::Right => (cursor + 1).min(len),
            MoveTarget::WordLeft => self.word_start_before(cursor),
            MoveTarget::WordRight => self.word_end_after(cursor),
            MoveTarget::LineStart => self.buffer.line_start(cursor),
            MoveTarget::LineEnd => self.buffer.line_end(cursor),
            MoveTarget::DocumentStart => 0,
            MoveTarget::DocumentEnd => len,
        };
        self.place(offset, extend_selection);
        self.selection != before
    }

    /// Offset of the start of the word before `offset`
    fn word_start_before(&self, offset: usize) -> usize {
        let mut pos = offset;

        // Skip whitespace first (moving backwards)
        while pos > 0 {
            match self.buffer.char_at(pos - 1) {
                Some(ch) if char_type(ch) == CharType::Whitespace => pos -= 1,
                _ => break,
            }
        }

        // Then skip chars of the same type
        if let Some(kind) = pos.checked_sub(1).and_then(|i| self.buffer.char_at(i)).map(char_type) {
            while pos > 0 {
                match self.buffer.char_at(pos - 1) {
                    Some(ch) if char_type(ch) == kind => pos -= 1,
                    _ => break,
                }
            }
        }
        pos
    }

    /// Offset of the end of the word after `offset`
    fn word_end_after(&self, offset: usize) -> usize {
        let len = self.buffer.len_chars();
        let mut pos = offset;

        while pos < len {
            match self.buffer.char_at(pos) {
                Some(ch) if char_type(ch) == CharType::Whitespace => pos += 1,
                _ => break,
            }
        }

        if let Some(kind) = self.buffer.char_at(pos).map(char_type) {
            while pos < len {
                match self.buffer.char_at(pos) {
                    Some(ch) if char_type(ch) == kind => pos += 1,
                    _ => break,
                }
            }
        }
        pos
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl<B: TextBufferMut> EditableState<B> {
    /// Insert a character at the cursor (replacing any selection)
    pub fn insert_char(&mut self, ch: char) -> bool {
        let offset = self.take_selection();
        self.buffer.insert_char(offset, ch);
        self.selection = Selection::collapsed(offset + 1);
        true
    }

    /// Insert text at the cursor (replacing any selection)
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() && self.selection.is_empty() {
            return false;
        }
        let offset = self.take_selection();
        self.buffer.insert(offset, text);
        self.selection = Selection::collapsed(offset + text.chars().count());
        true
    }

    /// Delete the selection, or the character before the cursor
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let cursor = self.cursor();
        if cursor == 0 {
            return false;
        }
        self.buffer.remove(cursor - 1..cursor);
        self.selection = Selection::collapsed(cursor - 1);
        true
    }

    /// Delete the selection, or the character after the cursor
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let cursor = self.cursor();
        if cursor >= self.buffer.len_chars() {
            return false;
        }
        self.buffer.remove(cursor..cursor + 1);
        true
    }

    /// Delete word before cursor
    pub fn delete_word_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let cursor = self.cursor();
        let start = self.word_start_before(cursor);
        if start >= cursor {
            return false;
        }
        self.buffer.remove(start..cursor);
        self.selection = Selection::collapsed(start);
        true
    }

    /// Replace the whole text and place the cursor
    pub fn set_text(&mut self, text: &str, cursor: usize) {
        self.buffer.set_content(text);
        self.set_cursor(cursor);
    }

    /// Apply an editing message. Returns true if text, cursor or selection changed.
    pub fn apply(&mut self, msg: &TextEditMsg) -> bool {
        match msg {
            TextEditMsg::Move(target) => self.move_to(*target, false),
            TextEditMsg::MoveWithSelection(target) => self.move_to(*target, true),
            TextEditMsg::SetCursor(offset) => {
                let before = self.selection;
                self.set_cursor(*offset);
                self.selection != before
            }
            TextEditMsg::InsertChar(ch) => self.insert_char(*ch),
            TextEditMsg::InsertText(text) => self.insert_text(text),
            TextEditMsg::InsertNewline => self.insert_char('\n'),
            TextEditMsg::DeleteBackward => self.delete_backward(),
            TextEditMsg::DeleteForward => self.delete_forward(),
            TextEditMsg::DeleteWordBackward => self.delete_word_backward(),
            TextEditMsg::SelectAll => {
                let before = self.selection;
                self.select_all();
                self.selection != before
            }
            TextEditMsg::CollapseSelection => {
                let before = self.selection;
                self.collapse_selection();
                self.selection != before
            }
        }
    }

    /// Remove the selected text, returning the offset where input goes
    fn take_selection(&mut self) -> usize {
        let range = self.selection.range();
        if !range.is_empty() {
            self.buffer.remove(range.clone());
        }
        range.start.min(self.buffer.len_chars())
    }

    fn delete_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let start = self.take_selection();
        self.selection = Selection::collapsed(start);
        true
    }
}
