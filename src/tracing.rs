//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! mention sessions and message dispatch.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=mention=debug,session=debug` - scoped filtering
//! - `RUST_LOG=mention_field::bridge=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/mention-field/logs/mention-field.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::MentionField;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG, falling back to `default_level`
/// (normally `FieldConfig::log_level`). Console output goes to stderr so
/// stdout stays reserved for host events.
pub fn init(default_level: &str) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "mention-field.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A second init (tests, embedding hosts) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of session state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub active: bool,
    pub query_start: Option<usize>,
    pub query: Option<String>,
    pub cursor: usize,
    pub text_len: usize,
    pub candidate_count: usize,
}

impl SessionSnapshot {
    pub fn from_field(field: &MentionField) -> Self {
        let state = field.session.state();
        Self {
            active: state.is_active(),
            query_start: state.query_start(),
            query: state.current_query().map(str::to_string),
            cursor: field.cursor(),
            text_len: field.len_chars(),
            candidate_count: field.candidates.len(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SessionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.active != other.active {
            let status = if other.active { "querying" } else { "idle" };
            changes.push(format!("session {}", status));
        }
        if self.query != other.query {
            changes.push(format!(
                "query: {:?} → {:?}",
                self.query.as_deref().unwrap_or(""),
                other.query.as_deref().unwrap_or("")
            ));
        }
        if self.cursor != other.cursor {
            changes.push(format!("cursor: {} → {}", self.cursor, other.cursor));
        }
        if self.text_len != other.text_len {
            changes.push(format!("len: {} → {}", self.text_len, other.text_len));
        }
        if self.candidate_count != other.candidate_count {
            changes.push(format!(
                "candidates: {} → {}",
                self.candidate_count, other.candidate_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
