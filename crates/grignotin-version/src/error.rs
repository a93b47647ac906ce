use grignotin_core::CoreError;
use thiserror::Error;

/// Errors that can occur while reading the toolchain feeds.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("invalid response from {url}, status code: {status}")]
    Status { url: String, status: u16 },

    #[error("failed to parse feed {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Http(CoreError),
}

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, VersionError>;

impl From<CoreError> for VersionError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Status { url, status, .. } => Self::Status { url, status },
            CoreError::Json { url, source } => Self::Json { url, source },
            other => Self::Http(other),
        }
    }
}
