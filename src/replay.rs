//! Scripted replay of host traffic against one field
//!
//! A script is a list of steps. Each step is either a field message
//! (`{"edit": {"insert_char": "@"}}`, `"tap"`, `{"select_candidate": 0}`)
//! or a method call (`{"method": "setUsers", "args": {...}}`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bridge::{MethodCall, MethodResult, Notifier, ViewRegistry};
use crate::error::MentionError;
use crate::mention::Entity;
use crate::messages::Msg;
use crate::model::{UserEntry, ViewId, ViewParams};

/// One scripted host interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Call(MethodCall),
    Msg(Msg),
}

/// What happened to one step
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Applied,
    Rejected(MentionError),
    Called(MethodResult),
}

/// Everything a replay run needs, derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayConfig {
    /// Script file; `None` reads the script from stdin
    pub script: Option<PathBuf>,
    pub users: Vec<Entity>,
    pub initial_text: String,
    pub view_id: ViewId,
    /// Engine config override; `None` uses the default location
    pub config_path: Option<PathBuf>,
}

impl ReplayConfig {
    /// Creation parameters for the replayed view
    pub fn view_params(&self) -> ViewParams {
        ViewParams {
            initial_text: self.initial_text.clone(),
            users: self
                .users
                .iter()
                .map(|u| UserEntry::new(&u.id, &u.display_name))
                .collect(),
            ..ViewParams::default()
        }
    }
}

/// Parse a script; JSON documents are accepted since they are valid YAML
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, MentionError> {
    if source.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(source).map_err(|e| MentionError::InvalidArgument(format!("script: {}", e)))
}

/// Read and parse a script file
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, MentionError> {
    let source = std::fs::read_to_string(path).map_err(|e| {
        MentionError::InvalidArgument(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_script(&source)
}

/// Run one step against `view_id`
pub fn run_step<N: Notifier>(
    registry: &mut ViewRegistry<N>,
    view_id: ViewId,
    step: ScriptStep,
) -> StepOutcome {
    match step {
        ScriptStep::Call(call) => StepOutcome::Called(registry.handle_call(&call).into()),
        ScriptStep::Msg(msg) => match registry.dispatch(view_id, msg) {
            Ok(()) => StepOutcome::Applied,
            Err(e) => {
                tracing::warn!("step rejected: {}", e);
                StepOutcome::Rejected(e)
            }
        },
    }
}
