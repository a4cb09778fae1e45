//! Error types shared by the workspace.

use thiserror::Error;

/// Every failure the orchestration engine can report.
#[derive(Error, Debug)]
pub enum BluetapError {
    #[error("{input} is not a valid bluetooth address")]
    InvalidAddress { input: String },

    #[error("invalid address type: {0} (expected BR_EDR, LE_PUBLIC or LE_RANDOM)")]
    InvalidAddressType(String),

    /// The tool wrote to stderr, or its stdout was rejected by the validator.
    #[error("error while executing command \"{command}\"")]
    CommandExecution {
        command: String,
        stdout: String,
        stderr: String,
    },

    #[error("could not run \"{command}\": {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("interrupted during {during}")]
    Interrupted { during: String },
}

/// Convenience type alias for Results with `BluetapError`.
pub type Result<T> = std::result::Result<T, BluetapError>;
