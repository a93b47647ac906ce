//! Go module proxy client.
//!
//! Speaks the module proxy protocol:
//! - `/{module}/@v/list` - list all versions
//! - `/{module}/@v/{version}.info` - version metadata
//! - `/{module}/@v/{version}.mod` - go.mod file
//! - `/{module}/@v/{version}.zip` - module sources
//! - `/{module}/@latest` - latest version info
//!
//! and the checksum database `lookup` endpoint.
//!
//! # Examples
//!
//! ```no_run
//! use grignotin_goproxy::ProxyClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ProxyClient::new().unwrap();
//!
//!     let versions = client.get_versions("github.com/hashicorp/consul/api").await.unwrap();
//!     println!("{} versions", versions.len());
//! }
//! ```

use crate::config::ProxyConfig;
use crate::error::{ProxyError, Result};
use crate::escape::escape_module_path;
use crate::types::VersionInfo;
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use grignotin_core::{HttpClient, HttpConfig};
use grignotin_gomod::{GoModFile, parse_go_mod};

/// Maximum allowed module path length
const MAX_MODULE_PATH_LENGTH: usize = 500;

/// Maximum allowed version string length
const MAX_VERSION_LENGTH: usize = 128;

/// Validates a module path for length.
fn validate_module_path(module_path: &str) -> Result<()> {
    if module_path.is_empty() {
        return Err(ProxyError::InvalidModulePath("module path is empty".into()));
    }

    if module_path.len() > MAX_MODULE_PATH_LENGTH {
        return Err(ProxyError::InvalidModulePath(format!(
            "module path exceeds maximum length of {} characters",
            MAX_MODULE_PATH_LENGTH
        )));
    }

    Ok(())
}

/// Validates a version string before it becomes part of a URL path.
fn validate_version_string(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(ProxyError::invalid_version(version, "version string is empty"));
    }

    if version.len() > MAX_VERSION_LENGTH {
        return Err(ProxyError::invalid_version(
            version,
            format!(
                "version string exceeds maximum length of {} characters",
                MAX_VERSION_LENGTH
            ),
        ));
    }

    if version.contains("..") || version.contains('/') || version.contains('\\') {
        return Err(ProxyError::invalid_version(
            version,
            "version string contains invalid characters",
        ));
    }

    Ok(())
}

/// Client for a Go module proxy and its checksum database.
///
/// One HTTP GET per call, nothing is cached. The client is cheap to clone.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http: HttpClient,
    proxy_url: String,
    sumdb_url: String,
}

impl ProxyClient {
    /// Creates a client for `proxy.golang.org` and `sum.golang.org`.
    pub fn new() -> Result<Self> {
        Self::with_config(&ProxyConfig::default())
    }

    pub fn with_config(config: &ProxyConfig) -> Result<Self> {
        Ok(Self::with_http(HttpClient::with_config(&HttpConfig::default())?, config))
    }

    /// Uses an existing HTTP client, to share its settings and connection pool.
    pub fn with_http(http: HttpClient, config: &ProxyConfig) -> Self {
        Self {
            http,
            proxy_url: config.proxy_url().to_string(),
            sumdb_url: config.sumdb_url().to_string(),
        }
    }

    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    pub fn sumdb_url(&self) -> &str {
        &self.sumdb_url
    }

    fn module_url(&self, module_path: &str, suffix: &str) -> String {
        format!("{}/{}/{}", self.proxy_url, escape_module_path(module_path), suffix)
    }

    /// Fetches all known versions of a module.
    ///
    /// Versions are returned in proxy order (not sorted). Pseudo-versions are
    /// not listed by the proxy.
    ///
    /// # Errors
    ///
    /// - `ProxyError::Api` if the proxy answers with a non-2xx status
    /// - `ProxyError::InvalidModulePath` if the module path is empty or too long
    pub async fn get_versions(&self, module_path: &str) -> Result<Vec<String>> {
        validate_module_path(module_path)?;

        let body = self
            .http
            .fetch_text(&self.module_url(module_path, "@v/list"))
            .await?;

        Ok(parse_version_list(&body))
    }

    /// Fetches metadata about a module version.
    ///
    /// `version` may also be a branch name or a commit hash: the proxy
    /// resolves it to a canonical version.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use grignotin_goproxy::ProxyClient;
    /// # async fn example() -> grignotin_goproxy::Result<()> {
    /// let client = ProxyClient::new()?;
    /// let info = client
    ///     .get_info("github.com/ijc25/Gotty", "a8b993ba6abdb0e0c12b0125c603323a71c7790c")
    ///     .await?;
    /// assert_eq!(info.version, "v0.0.0-20170406111628-a8b993ba6abd");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_info(&self, module_path: &str, version: &str) -> Result<VersionInfo> {
        validate_module_path(module_path)?;
        validate_version_string(version)?;

        self.fetch_info(module_path, &format!("@v/{version}.info"))
            .await
    }

    /// Fetches metadata about the latest version of a module.
    pub async fn get_latest(&self, module_path: &str) -> Result<VersionInfo> {
        validate_module_path(module_path)?;

        self.fetch_info(module_path, "@latest").await
    }

    async fn fetch_info(&self, module_path: &str, suffix: &str) -> Result<VersionInfo> {
        let body = self
            .http
            .fetch_text(&self.module_url(module_path, suffix))
            .await?;

        serde_json::from_str(&body).map_err(|e| ProxyError::ApiResponseError {
            module: module_path.to_string(),
            source: e,
        })
    }

    /// Fetches the go.mod file of a module version, as served.
    pub async fn get_raw_mod_file(&self, module_path: &str, version: &str) -> Result<String> {
        validate_module_path(module_path)?;
        validate_version_string(version)?;

        let body = self
            .http
            .fetch_text(&self.module_url(module_path, &format!("@v/{version}.mod")))
            .await?;

        Ok(body)
    }

    /// Fetches and parses the go.mod file of a module version.
    ///
    /// # Errors
    ///
    /// Same as [`get_raw_mod_file`](Self::get_raw_mod_file), plus
    /// `ProxyError::ModFile` when the content is not a valid go.mod.
    pub async fn get_mod_file(&self, module_path: &str, version: &str) -> Result<GoModFile> {
        let content = self.get_raw_mod_file(module_path, version).await?;

        parse_go_mod(&content).map_err(|e| ProxyError::ModFile {
            module: module_path.to_string(),
            source: e,
        })
    }

    /// Downloads the source archive (zip) of a module version into memory.
    pub async fn get_sources(&self, module_path: &str, version: &str) -> Result<Bytes> {
        validate_module_path(module_path)?;
        validate_version_string(version)?;

        let data = self
            .http
            .fetch_bytes(&self.module_url(module_path, &format!("@v/{version}.zip")))
            .await?;

        Ok(data)
    }

    /// Streams the source archive (zip) of a module version.
    ///
    /// The status is checked before the stream is returned. The caller drains
    /// the stream; dropping it closes the connection.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use futures::TryStreamExt;
    /// use grignotin_goproxy::ProxyClient;
    ///
    /// # async fn example() -> grignotin_goproxy::Result<()> {
    /// let client = ProxyClient::new()?;
    /// let mut stream = client
    ///     .download_sources("github.com/ldez/grignotin", "v0.1.0")
    ///     .await?;
    ///
    /// let mut size = 0;
    /// while let Some(chunk) = stream.try_next().await? {
    ///     size += chunk.len();
    /// }
    /// println!("{size} bytes");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn download_sources(
        &self,
        module_path: &str,
        version: &str,
    ) -> Result<BoxStream<'static, Result<Bytes>>> {
        validate_module_path(module_path)?;
        validate_version_string(version)?;

        let stream = self
            .http
            .fetch_stream(&self.module_url(module_path, &format!("@v/{version}.zip")))
            .await?;

        Ok(stream.map_err(ProxyError::from).boxed())
    }

    /// Looks up the checksum database record of a module version.
    ///
    /// Returns the raw record: the record id, the `go.sum` lines and the
    /// signed tree note.
    pub async fn lookup(&self, module_path: &str, version: &str) -> Result<String> {
        validate_module_path(module_path)?;
        validate_version_string(version)?;

        let url = format!(
            "{}/lookup/{}@{}",
            self.sumdb_url,
            escape_module_path(module_path),
            version
        );

        let body = self.http.fetch_text(&url).await?;

        Ok(body)
    }
}

/// Parses a newline-separated version list, dropping blank lines.
fn parse_version_list(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
