//! Errors of the module proxy client.

use grignotin_core::CoreError;
use grignotin_goenv::GoEnvError;
use grignotin_gomod::GoModError;
use thiserror::Error;

/// Error answered by the proxy or the checksum database.
///
/// `message` is the trimmed response body, which is where both services
/// explain what went wrong (`not found: unknown revision v9.9.9`, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("error: {status_code}: {message}")]
pub struct ApiError {
    pub status_code: u16,
    pub message: String,
}

/// Errors that can occur while talking to the module proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Non-2xx response.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("invalid module path: {0}")]
    InvalidModulePath(String),

    #[error("invalid version '{version}': {message}")]
    InvalidVersion { version: String, message: String },

    /// Failed to deserialize a proxy response
    #[error("failed to parse proxy response for '{module}': {source}")]
    ApiResponseError {
        module: String,
        #[source]
        source: serde_json::Error,
    },

    /// The `.mod` file served by the proxy is not a valid go.mod
    #[error("invalid go.mod for '{module}': {source}")]
    ModFile {
        module: String,
        #[source]
        source: GoModError,
    },

    #[error(transparent)]
    Go(#[from] GoEnvError),

    #[error(transparent)]
    Http(CoreError),
}

/// Result type alias for proxy operations.
pub type Result<T> = std::result::Result<T, ProxyError>;

impl ProxyError {
    pub fn invalid_version(version: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            message: message.into(),
        }
    }

    /// HTTP status code of an [`ApiError`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status_code),
            _ => None,
        }
    }
}

impl From<CoreError> for ProxyError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Status { status, body, .. } => Self::Api(ApiError {
                status_code: status,
                message: body,
            }),
            other => Self::Http(other),
        }
    }
}
