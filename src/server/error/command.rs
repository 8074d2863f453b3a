use thiserror::Error;

/// Errors surfaced to Discord users when a command cannot run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Arguments were missing or malformed. Holds the usage line to show.
    #[error("{0}")]
    Usage(String),
}
