use grignotin_core::CoreError;
use thiserror::Error;

/// Errors that can occur while resolving go-get meta information.
#[derive(Error, Debug)]
pub enum MetaGoError {
    /// The go-source URL has too few `/`-separated fields to hold
    /// `host/owner/repo`.
    #[error("malformed go-source '{token}': expected at least 5 '/' fields, found {fields}")]
    MalformedGoSource { token: String, fields: usize },

    /// go-import has two tokens: a VCS but no repository URL.
    #[error("malformed go-import '{}': missing repository URL", .tokens.join(" "))]
    MalformedGoImport { tokens: Vec<String> },

    #[error("status code error for {url}: {status}")]
    Status { url: String, status: u16 },

    #[error(transparent)]
    Http(CoreError),
}

/// Result type alias for meta-go operations.
pub type Result<T> = std::result::Result<T, MetaGoError>;

impl From<CoreError> for MetaGoError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Status { url, status, .. } => Self::Status { url, status },
            other => Self::Http(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_go_source_display() {
        let err = MetaGoError::MalformedGoSource {
            token: "https://example.com".into(),
            fields: 3,
        };
        assert_eq!(
            err.to_string(),
            "malformed go-source 'https://example.com': expected at least 5 '/' fields, found 3"
        );
    }

    #[test]
    fn test_malformed_go_import_display() {
        let err = MetaGoError::MalformedGoImport {
            tokens: vec!["example.com/pkg".into(), "git".into()],
        };
        assert_eq!(
            err.to_string(),
            "malformed go-import 'example.com/pkg git': missing repository URL"
        );
    }

    #[test]
    fn test_status_conversion() {
        let err: MetaGoError = CoreError::Status {
            url: "https://example.com?go-get=1".into(),
            status: 404,
            body: "page not found".into(),
        }
        .into();

        assert!(matches!(err, MetaGoError::Status { status: 404, .. }));
    }
}
