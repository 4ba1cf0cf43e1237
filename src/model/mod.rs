//! Model types for embedded mention fields

pub mod field;
pub mod params;

pub use field::{MentionField, ViewId};
pub use params::{entities_from_entries, FieldStyle, UserEntry, ViewParams};
