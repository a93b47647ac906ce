//! Errors produced while invoking the Go toolchain.

use thiserror::Error;

/// Errors that can occur while reading the Go environment.
#[derive(Error, Debug)]
pub enum GoEnvError {
    /// The `go` binary could not be started
    #[error("failed to run command {command:?}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited with a failure status
    #[error("command {command:?}: {status}: {stderr}")]
    Command {
        command: String,
        status: String,
        stderr: String,
    },

    /// The command output is not the expected JSON
    #[error("failed to decode output of {command:?}: {source}")]
    Json {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for `go env` operations.
pub type Result<T> = std::result::Result<T, GoEnvError>;

impl GoEnvError {
    /// Helper for creating spawn errors
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Helper for creating JSON decoding errors
    pub fn json(command: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            command: command.into(),
            source,
        }
    }
}
