//! Errors specific to Go module information.

use grignotin_goenv::GoEnvError;
use thiserror::Error;

/// Errors that can occur while reading module information.
#[derive(Error, Debug)]
pub enum GoModError {
    /// Running the Go toolchain failed
    #[error(transparent)]
    Go(#[from] GoEnvError),

    /// `go list` reported a module without go.mod
    #[error("working directory is not part of a module")]
    NotInModule,

    /// No main module with a go.mod was found
    #[error("go.mod file not found")]
    GoModNotFound,

    /// The go.mod file has no `module` directive
    #[error("no module directive in {path}")]
    MissingModuleDirective { path: String },

    /// The go.mod file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// `go list -m -json` output could not be decoded
    #[error("failed to decode `go list` output: {0}")]
    Json(#[source] serde_json::Error),

    /// Invalid go.mod syntax
    #[error("failed to parse go.mod at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type alias for module operations.
pub type Result<T> = std::result::Result<T, GoModError>;

impl GoModError {
    /// Helper for creating go.mod syntax errors
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
