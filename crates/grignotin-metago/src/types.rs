use serde::Serialize;

/// go-get meta information of a package.
///
/// Holds the queried package name and the whitespace-separated tokens of its
/// `go-source` and `go-import` meta tags. Built once from an HTML page and
/// never modified afterwards.
///
/// # Examples
///
/// ```
/// use grignotin_metago::MetaGo;
///
/// let meta = MetaGo::new(
///     "google.golang.org/grpc",
///     Vec::new(),
///     vec!["google.golang.org/grpc".into(), "git".into(), "https://github.com/grpc/grpc-go".into()],
/// );
/// assert_eq!(meta.go_import()[1], "git");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaGo {
    pkg: String,
    go_source: Vec<String>,
    go_import: Vec<String>,
}

impl MetaGo {
    pub fn new(pkg: impl Into<String>, go_source: Vec<String>, go_import: Vec<String>) -> Self {
        Self {
            pkg: pkg.into(),
            go_source,
            go_import,
        }
    }

    /// Same tags, attached to another package name.
    pub fn with_pkg(self, pkg: impl Into<String>) -> Self {
        Self {
            pkg: pkg.into(),
            ..self
        }
    }

    pub fn pkg(&self) -> &str {
        &self.pkg
    }

    pub fn go_source(&self) -> &[String] {
        &self.go_source
    }

    pub fn go_import(&self) -> &[String] {
        &self.go_import
    }
}
