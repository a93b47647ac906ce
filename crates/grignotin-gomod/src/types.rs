//! Types for Go module information.

use serde::{Deserialize, Serialize};

/// Module information as printed by `go list -m -json`.
///
/// `go list` omits empty fields, hence the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModInfo {
    /// Module path (e.g., "github.com/ldez/grignotin")
    #[serde(default)]
    pub path: String,
    /// Directory holding the module files
    #[serde(default)]
    pub dir: String,
    /// Path to the go.mod file
    #[serde(default)]
    pub go_mod: String,
    /// Go version declared by the module
    #[serde(default)]
    pub go_version: String,
    /// Whether this is the main module
    #[serde(default)]
    pub main: bool,
}

/// Parsed content of a go.mod file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GoModFile {
    /// Path declared in the `module` directive
    pub module: Option<String>,
    /// Version from the `go` directive
    pub go_version: Option<String>,
    /// Version from the `toolchain` directive
    pub toolchain: Option<String>,
    pub require: Vec<Require>,
    pub replace: Vec<Replace>,
    pub exclude: Vec<ModuleVersion>,
    pub retract: Vec<Retract>,
}

/// A module path at a given version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModuleVersion {
    pub path: String,
    pub version: String,
}

/// A `require` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Require {
    pub path: String,
    pub version: String,
    /// Marked with a `// indirect` comment
    pub indirect: bool,
}

/// One side of a `replace` directive.
///
/// The version is absent on the left side when every version is replaced,
/// and on the right side when the replacement is a local directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceTarget {
    pub path: String,
    pub version: Option<String>,
}

/// A `replace` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replace {
    pub old: ReplaceTarget,
    pub new: ReplaceTarget,
}

/// A `retract` entry: a single version or a closed interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Retract {
    pub low: String,
    pub high: String,
    /// Comment given on the same line, if any
    pub rationale: Option<String>,
}

impl GoModFile {
    /// Finds the required version of a module.
    pub fn required_version(&self, path: &str) -> Option<&str> {
        self.require
            .iter()
            .find(|r| r.path == path)
            .map(|r| r.version.as_str())
    }
}
