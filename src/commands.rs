//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host must perform after an update:
//! restyling its text widget, showing or hiding the candidate list, and
//! forwarding notifications to the embedding application.

use crate::mention::{Entity, StyledText};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Execute multiple commands, in order
    Batch(Vec<Cmd>),
    /// Apply this styled projection to the text widget
    Restyle(StyledText),
    /// Show the candidate list with these entities
    ShowCandidates(Vec<Entity>),
    /// Hide the candidate list
    HideCandidates,
    /// Replace the widget's text and place its cursor (after a commit)
    ReplaceText { text: String, cursor: usize },
    /// Tell the embedding application the raw text changed
    NotifyTextChanged(String),
    /// Tell the embedding application the field was tapped
    NotifyTap,
}

impl Cmd {
    /// Create a batch of commands, dropping `None`s and unwrapping singletons
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
