use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version metadata served by `.info` and `@latest`.
///
/// Fields the proxy adds on top (`Origin`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionInfo {
    pub version: String,
    pub time: DateTime<Utc>,
}
