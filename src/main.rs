use anyhow::{Context, Result};
use clap::Parser;
use std::io::{Read, Write};

use mention_field::bridge::{JsonLinesNotifier, ViewRegistry};
use mention_field::config::FieldConfig;
use mention_field::replay::{self, ReplayConfig, StepOutcome};

mod cli;

use cli::CliArgs;

fn load_config(replay: &ReplayConfig) -> FieldConfig {
    match &replay.config_path {
        Some(path) => FieldConfig::load_from(path),
        None => FieldConfig::load(),
    }
}

fn read_steps(replay: &ReplayConfig) -> Result<Vec<replay::ScriptStep>> {
    let steps = match &replay.script {
        Some(path) => replay::load_script(path)
            .with_context(|| format!("loading script {}", path.display()))?,
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("reading script from stdin")?;
            replay::parse_script(&source).context("parsing script from stdin")?
        }
    };
    Ok(steps)
}

fn main() -> Result<()> {
    let replay = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let config = load_config(&replay);
    mention_field::tracing::init(&config.log_level);

    let steps = read_steps(&replay)?;
    tracing::info!(steps = steps.len(), view = replay.view_id, "replaying");

    let stdout = std::io::stdout();
    let mut registry = ViewRegistry::new(config, JsonLinesNotifier::new(stdout.lock()));
    registry.create_view(replay.view_id, &replay.view_params());

    for step in steps {
        if let StepOutcome::Called(result) = replay::run_step(&mut registry, replay.view_id, step) {
            let out = registry.notifier_mut().writer_mut();
            serde_json::to_writer(&mut *out, &result).context("writing method result")?;
            writeln!(out).context("writing method result")?;
        }
    }

    if let Some(field) = registry.get(replay.view_id) {
        tracing::info!(text = %field.text(), "final text");
    }
    Ok(())
}
