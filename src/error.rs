//! Error types for the mention engine and its host bridge
//!
//! Every failure that crosses the bridge carries a stable wire code
//! (see [`MentionError::code`]). Color parse failures never become a
//! `MentionError`: they are recovered locally by [`crate::theme::Color::parse_or`].

use thiserror::Error;

/// Errors surfaced by the session engine, the field update loop and the bridge
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MentionError {
    /// Missing or malformed required fields in an inbound command
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Commit attempted without an active query, or with offsets that no
    /// longer describe the current text
    #[error("invalid session state: {0}")]
    InvalidSessionState(String),

    /// Entity data that cannot be encoded as a mention token
    #[error("entity cannot be encoded as a mention: {0}")]
    Encoding(String),

    /// Inbound command addressed to a view that is not registered
    #[error("no view registered with id {0}")]
    UnknownView(i64),

    /// Inbound command the bridge does not implement
    #[error("method not implemented: {0}")]
    UnknownCommand(String),

    /// Reading or writing configuration failed
    #[error("config error: {0}")]
    Config(String),
}

impl MentionError {
    /// Stable error code reported to the embedding host
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) | Self::Encoding(_) => "INVALID_ARGUMENT",
            Self::InvalidSessionState(_) => "INVALID_SESSION_STATE",
            Self::UnknownView(_) => "UNKNOWN_VIEW",
            Self::UnknownCommand(_) => "NOT_IMPLEMENTED",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

pub type Result<T, E = MentionError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            MentionError::InvalidArgument("x".into()).code(),
            "INVALID_ARGUMENT"
        );
        assert_eq!(MentionError::Encoding("x".into()).code(), "INVALID_ARGUMENT");
        assert_eq!(
            MentionError::InvalidSessionState("x".into()).code(),
            "INVALID_SESSION_STATE"
        );
        assert_eq!(MentionError::UnknownView(3).code(), "UNKNOWN_VIEW");
        assert_eq!(
            MentionError::UnknownCommand("foo".into()).code(),
            "NOT_IMPLEMENTED"
        );
        assert_eq!(MentionError::Config("x".into()).code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_display() {
        let err = MentionError::UnknownCommand("frobnicate".into());
        assert_eq!(err.to_string(), "method not implemented: frobnicate");
        assert_eq!(
            MentionError::UnknownView(7).to_string(),
            "no view registered with id 7"
        );
    }
}
