//! Mention Field - Elm-style mention-aware text input engine
//!
//! This crate provides the core types and logic for a text field that
//! stores `@[displayName](id)` tokens in its raw text, tracks an in-progress
//! `@` query, filters candidates and commits the chosen entity. Host
//! platforms embed it through the [`bridge`] module.

pub mod bridge;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod error;
pub mod mention;
pub mod messages;
pub mod model;
pub mod replay;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use bridge::{HostEvent, MethodCall, MethodResult, ViewRegistry};
pub use commands::Cmd;
pub use config::FieldConfig;
pub use error::MentionError;
pub use mention::{Entity, MentionOccurrence, MentionSession, SessionState};
pub use messages::Msg;
pub use model::{MentionField, ViewId, ViewParams};
pub use theme::Color;
