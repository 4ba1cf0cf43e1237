//! Mention engine: token grammar and the query session state machine.
//!
//! Raw text is the single source of truth. It holds plain text interleaved
//! with tokens of the form `@[displayName](entityId)`:
//!
//! - [`parser`] scans tokens out of raw text, formats entities into tokens and
//!   renders the styled projection ([`StyledText`]).
//! - [`session`] tracks the in-progress `@` query, filters candidates and
//!   splices a committed entity into the text.
//!
//! # Example
//!
//! ```
//! use mention_field::mention::{Entity, MentionSession, scan_all};
//!
//! let users = vec![Entity::new("42", "Ana")];
//! let mut session = MentionSession::default();
//!
//! session.on_text_changed("hello @", 7, &users);
//! let splice = session.commit("hello @", 7, &users[0]).unwrap();
//!
//! assert_eq!(splice.text, "hello @[Ana](42)");
//! assert_eq!(scan_all(&splice.text)[0].entity_id, "42");
//! ```

pub mod entity;
pub mod filter;
pub mod parser;
pub mod session;
pub mod style;

pub use entity::{Entity, MentionOccurrence};
pub use filter::{filter_candidates, filter_limited};
pub use parser::{format, mention_at, mentioned_ids, plain_text, render, scan, scan_all, Occurrences};
pub use session::{EmptyResultPolicy, MentionSession, SessionState, SessionUpdate, Splice};
pub use style::{StyleSpan, StyledText, TextStyle};
