//! Command-line argument parsing for the replay driver
//!
//! Supports:
//! - Replaying a script file, or a script read from stdin
//! - Seeding the field with text and users
//! - Overriding the config file location

use clap::Parser;
use std::path::PathBuf;

use mention_field::mention::Entity;
use mention_field::replay::ReplayConfig;

/// Replay host traffic against a mention field
#[derive(Parser, Debug)]
#[command(
    name = "mention-field",
    version,
    about = "Replay host traffic against a mention field"
)]
pub struct CliArgs {
    /// Script of steps (YAML or JSON); reads stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Mentionable users as `id:name`, comma separated
    #[arg(short, long, value_name = "USERS", value_delimiter = ',')]
    pub users: Vec<String>,

    /// Initial raw text of the field
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// View id reported in host events
    #[arg(long, value_name = "ID", default_value_t = 1)]
    pub view_id: i64,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into a replay configuration
    pub fn into_config(self) -> Result<ReplayConfig, String> {
        let users = self
            .users
            .iter()
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| parse_user(entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReplayConfig {
            script: self.script,
            users,
            initial_text: self.text,
            view_id: self.view_id,
            config_path: self.config,
        })
    }
}

fn parse_user(entry: &str) -> Result<Entity, String> {
    let (id, name) = entry
        .split_once(':')
        .ok_or_else(|| format!("user '{}' must be written as id:name", entry))?;
    let entity = Entity::new(id.trim(), name.trim());
    entity.validate().map_err(|e| e.to_string())?;
    Ok(entity)
}
