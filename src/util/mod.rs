//! Utility modules

pub mod text;

pub use text::{char_before, char_len, char_type, clamp_offset, slice_chars, CharType};
