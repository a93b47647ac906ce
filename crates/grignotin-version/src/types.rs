//! Feed payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Build dashboard state from build.golang.org.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    #[serde(default)]
    pub builders: Vec<String>,
    #[serde(default)]
    pub revisions: Vec<Revision>,
}

/// A commit tested by the build dashboard.
///
/// `results` has one entry per builder, in the order of [`Build::builders`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    pub repo: String,
    pub revision: String,
    pub date: DateTime<Utc>,
    pub branch: String,
    pub author: String,
    pub desc: String,
    #[serde(default)]
    pub results: Vec<String>,
    /// Go revision a sub-repository commit was tested against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go_revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go_branch: Option<String>,
}

/// A Go release listed on the downloads page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub version: String,
    pub stable: bool,
    #[serde(default)]
    pub files: Vec<File>,
}

/// A downloadable file of a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub filename: String,
    pub os: String,
    pub arch: String,
    pub version: String,
    pub sha256: String,
    pub size: u64,
    /// `archive`, `installer` or `source`
    pub kind: String,
}
