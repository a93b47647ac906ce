//! Client for the build dashboard and downloads page feeds.

use crate::error::Result;
use crate::types::{Build, Release};
use grignotin_core::HttpClient;

/// Build dashboard.
pub const DEFAULT_BUILD_URL: &str = "https://build.golang.org/";

/// Downloads page.
pub const DEFAULT_DL_URL: &str = "https://golang.org/dl/";

/// Reads the JSON feeds of the Go build dashboard and downloads page.
///
/// # Examples
///
/// ```no_run
/// use grignotin_version::VersionClient;
///
/// # async fn example() -> grignotin_version::Result<()> {
/// let client = VersionClient::new()?;
///
/// for release in client.get_releases(false).await? {
///     println!("{} ({} files)", release.version, release.files.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VersionClient {
    http: HttpClient,
    build_url: String,
    dl_url: String,
}

impl VersionClient {
    pub fn new() -> Result<Self> {
        Ok(Self::with_http(HttpClient::new()?))
    }

    pub fn with_http(http: HttpClient) -> Self {
        Self {
            http,
            build_url: DEFAULT_BUILD_URL.to_string(),
            dl_url: DEFAULT_DL_URL.to_string(),
        }
    }

    pub fn with_build_url(mut self, url: impl Into<String>) -> Self {
        self.build_url = url.into();
        self
    }

    pub fn with_dl_url(mut self, url: impl Into<String>) -> Self {
        self.dl_url = url.into();
        self
    }

    /// Gets the state of the build dashboard.
    pub async fn get_build(&self) -> Result<Build> {
        let build = self
            .http
            .fetch_json_with_query(&self.build_url, &[("mode", "json")])
            .await?;

        Ok(build)
    }

    /// Gets the Go releases.
    ///
    /// Only the current stable and unstable releases are listed unless `all`
    /// is set.
    pub async fn get_releases(&self, all: bool) -> Result<Vec<Release>> {
        let mut query = vec![("mode", "json")];
        if all {
            query.push(("include", "all"));
        }

        let releases = self
            .http
            .fetch_json_with_query(&self.dl_url, &query)
            .await?;

        Ok(releases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VersionError;
    use chrono::{TimeZone, Utc};
    use mockito::Matcher;

    const BUILD: &str = r#"{
  "builders": ["linux-amd64", "windows-amd64"],
  "revisions": [
    {
      "repo": "go",
      "revision": "8ff2e2be5cd5d9a7c1c12d6d2ab6f13a3c0ff1a1",
      "date": "2024-11-12T19:41:09Z",
      "branch": "master",
      "author": "Gopher <gopher@golang.org>",
      "desc": "cmd/go: fix something",
      "results": ["ok", ""]
    },
    {
      "repo": "net",
      "revision": "334afa0b3d8f5f2c2d4c7a5b6b4e3f2e1d0c9b8a",
      "date": "2024-11-11T08:00:00Z",
      "branch": "master",
      "author": "Gopher <gopher@golang.org>",
      "desc": "http2: fix something else",
      "results": ["ok", "ok"],
      "goRevision": "8ff2e2be5cd5d9a7c1c12d6d2ab6f13a3c0ff1a1",
      "goBranch": "master"
    }
  ]
}"#;

    const RELEASES: &str = r#"[
  {
    "version": "go1.23.3",
    "stable": true,
    "files": [
      {
        "filename": "go1.23.3.linux-amd64.tar.gz",
        "os": "linux",
        "arch": "amd64",
        "version": "go1.23.3",
        "sha256": "a0afb9744c00648bafb1b90b4aba5bdb86f424f02f9275399ce0c20b93a2c3a8",
        "size": 73645472,
        "kind": "archive"
      },
      {
        "filename": "go1.23.3.src.tar.gz",
        "os": "",
        "arch": "",
        "version": "go1.23.3",
        "sha256": "8d6a77332487557c6afa2421131b50f83db4ae3c579c3bc72e670ee1f6968599",
        "size": 28169798,
        "kind": "source"
      }
    ]
  },
  {
    "version": "go1.22.9",
    "stable": true,
    "files": []
  }
]"#;

    #[tokio::test]
    async fn test_get_build() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded("mode".into(), "json".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BUILD)
            .create_async()
            .await;

        let client = VersionClient::new().unwrap().with_build_url(server.url());
        let build = client.get_build().await.unwrap();

        assert_eq!(build.builders, vec!["linux-amd64", "windows-amd64"]);
        assert_eq!(build.revisions.len(), 2);

        let go = &build.revisions[0];
        assert_eq!(go.repo, "go");
        assert_eq!(go.date, Utc.with_ymd_and_hms(2024, 11, 12, 19, 41, 9).unwrap());
        assert_eq!(go.go_revision, None);

        let net = &build.revisions[1];
        assert_eq!(net.go_branch.as_deref(), Some("master"));
        assert_eq!(net.results, vec!["ok", "ok"]);
    }

    #[tokio::test]
    async fn test_get_releases() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/dl/")
            .match_query(Matcher::Exact("mode=json".into()))
            .with_status(200)
            .with_body(RELEASES)
            .create_async()
            .await;

        let client = VersionClient::new()
            .unwrap()
            .with_dl_url(format!("{}/dl/", server.url()));
        let releases = client.get_releases(false).await.unwrap();

        assert_eq!(releases.len(), 2);
        assert!(releases[0].stable);
        assert_eq!(releases[0].files[0].size, 73_645_472);
        assert_eq!(releases[0].files[1].kind, "source");
        assert!(releases[1].files.is_empty());
    }

    #[tokio::test]
    async fn test_get_releases_all() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/dl/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("mode".into(), "json".into()),
                Matcher::UrlEncoded("include".into(), "all".into()),
            ]))
            .with_status(200)
            .with_body(r#"[{"version": "go1.4", "stable": true, "files": []}]"#)
            .create_async()
            .await;

        let client = VersionClient::new()
            .unwrap()
            .with_dl_url(format!("{}/dl/", server.url()));
        let releases = client.get_releases(true).await.unwrap();

        assert_eq!(releases[0].version, "go1.4");
    }

    #[tokio::test]
    async fn test_status_error() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = VersionClient::new().unwrap().with_build_url(server.url());
        let result = client.get_build().await;

        assert!(matches!(result, Err(VersionError::Status { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/dl/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"version": "go1.23.3"}"#)
            .create_async()
            .await;

        let client = VersionClient::new()
            .unwrap()
            .with_dl_url(format!("{}/dl/", server.url()));
        let result = client.get_releases(false).await;

        assert!(matches!(result, Err(VersionError::Json { .. })));
    }

    #[tokio::test]
    #[ignore]
    async fn test_real_get_build() {
        let build = VersionClient::new().unwrap().get_build().await.unwrap();
        assert!(!build.builders.is_empty());
        assert!(!build.revisions.is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn test_real_get_releases() {
        let releases = VersionClient::new()
            .unwrap()
            .get_releases(false)
            .await
            .unwrap();
        assert!(!releases.is_empty());
    }
}
