//! go-get meta information client.

use crate::error::Result;
use crate::parser::parse_meta_go;
use crate::types::MetaGo;
use grignotin_core::HttpClient;
use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing major version of a module path with at least two segments.
static MAJOR_VERSION_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.+/.+)/v\d+$").unwrap());

/// Builds the `?go-get=1` URL of a package.
///
/// A `/vN` major version suffix is dropped: `mvdan.cc/xurls/v2` is served by
/// `mvdan.cc/xurls`.
fn make_url(scheme: &str, pkg: &str) -> String {
    let name = MAJOR_VERSION_SUFFIX
        .captures(pkg)
        .and_then(|caps| caps.get(1))
        .map_or(pkg, |m| m.as_str());

    format!("{scheme}://{name}?go-get=1")
}

/// Fetches go-get meta tags.
///
/// # Examples
///
/// ```no_run
/// use grignotin_metago::{MetaGoClient, effective_pkg_source};
///
/// # async fn example() -> grignotin_metago::Result<()> {
/// let client = MetaGoClient::new()?;
/// let meta = client.get("k8s.io/api").await?;
/// assert_eq!(effective_pkg_source(&meta)?, "github.com/kubernetes/api");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MetaGoClient {
    http: HttpClient,
    scheme: String,
}

impl MetaGoClient {
    pub fn new() -> Result<Self> {
        Ok(Self::with_http(HttpClient::new()?))
    }

    pub fn with_http(http: HttpClient) -> Self {
        Self {
            http,
            scheme: "https".to_string(),
        }
    }

    /// Uses another URL scheme than `https`, e.g. for a plain HTTP server.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Gets the go-get meta information of a package.
    ///
    /// The returned record carries `pkg` as given, even when the page was
    /// fetched without its major version suffix.
    ///
    /// # Errors
    ///
    /// - `MetaGoError::Status` if the server does not answer with a success status
    /// - `MetaGoError::Http` if the request fails
    pub async fn get(&self, pkg: &str) -> Result<MetaGo> {
        let url = make_url(&self.scheme, pkg);

        let body = self.http.fetch_bytes(&url).await?;
        let html = String::from_utf8_lossy(&body);

        let meta = parse_meta_go(&html);
        if meta.go_import().is_empty() && meta.go_source().is_empty() {
            tracing::debug!(pkg, %url, "no go-get meta tags");
        }

        Ok(meta.with_pkg(pkg))
    }
}
