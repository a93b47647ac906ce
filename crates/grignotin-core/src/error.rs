use thiserror::Error;

/// Core error types shared by every grignotin client.
///
/// Client crates wrap these in their own error enums, so a caller of
/// `grignotin-goproxy` never has to match on `CoreError` directly.
///
/// # Examples
///
/// ```
/// use grignotin_core::error::CoreError;
///
/// let err = CoreError::Status {
///     url: "https://proxy.golang.org/foo/@v/list".into(),
///     status: 404,
///     body: "not found".into(),
/// };
/// assert_eq!(err.status(), Some(404));
/// ```
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid response from {url}: [{status}] {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response body from {url} is not valid UTF-8: {source}")]
    Utf8 {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Convenience type alias for `Result<T, CoreError>`.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// HTTP status code, when the error comes from a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
