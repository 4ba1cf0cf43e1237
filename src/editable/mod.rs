//! Text editing layer for the mention field.
//!
//! Host input events (keystrokes, paste, taps) are translated into
//! [`TextEditMsg`] values and applied to an [`EditableState`]. The mention
//! session reads the resulting text and cursor; it never sees host events.
//!
//! # Architecture
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: Traits abstracting over buffer implementations
//! - [`StringBuffer`]: `String`-backed buffer addressed by char offsets
//! - [`EditableState`]: Buffer plus a single cursor and selection
//! - [`TextEditMsg`]: Message type for all editing operations
//!
//! # Example
//!
//! ```
//! use mention_field::editable::{EditableState, StringBuffer, TextEditMsg};
//!
//! let mut state = EditableState::with_cursor_at_end(StringBuffer::from_text("hello"));
//! state.apply(&TextEditMsg::InsertText(" @".to_string()));
//!
//! assert_eq!(state.text(), "hello @");
//! assert_eq!(state.cursor(), 7);
//! ```

mod buffer;
mod messages;
mod selection;
mod state;

// Re-export main types
pub use buffer::{StringBuffer, TextBuffer, TextBufferMut};
pub use messages::{MoveTarget, TextEditMsg};
pub use selection::Selection;
pub use state::EditableState;
