//! Readers for the Go environment.
//!
//! [`EnvironmentReader`] is the seam between code that needs toolchain
//! settings and the toolchain itself: [`GoEnv`] asks `go env`, [`StaticEnv`]
//! answers from a fixed map.

use crate::command::GoCommand;
use crate::error::{GoEnvError, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// Source of Go environment variables.
///
/// Unknown or unset variables are reported as empty strings, the same way
/// `go env` prints them.
#[async_trait]
pub trait EnvironmentReader: Send + Sync {
    /// Gets the values of the given variables.
    ///
    /// An empty `keys` slice means every variable known to the reader.
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>>;

    /// Gets the value of a single variable.
    async fn get_one(&self, key: &str) -> Result<String> {
        let mut values = self.get(&[key]).await?;
        Ok(values.remove(key).unwrap_or_default())
    }

    /// Gets every variable known to the reader.
    async fn get_all(&self) -> Result<HashMap<String, String>> {
        self.get(&[]).await
    }
}

/// Reads the environment from `go env -json`.
///
/// # Examples
///
/// ```no_run
/// use grignotin_goenv::{EnvironmentReader, GoEnv, vars};
///
/// # async fn example() -> grignotin_goenv::Result<()> {
/// let env = GoEnv::new();
/// let gomod = env.get_one(vars::GOMOD).await?;
/// println!("go.mod: {gomod}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GoEnv {
    go: GoCommand,
}

impl GoEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a specific `go` command (binary and working directory).
    pub fn with_command(go: GoCommand) -> Self {
        Self { go }
    }

    pub fn command(&self) -> &GoCommand {
        &self.go
    }
}

#[async_trait]
impl EnvironmentReader for GoEnv {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>> {
        let mut args = Vec::with_capacity(keys.len() + 2);
        args.push("env");
        args.push("-json");
        args.extend_from_slice(keys);

        let stdout = self.go.output(&args).await?;

        parse_env_json(&stdout).map_err(|e| GoEnvError::json(self.go.describe(&args), e))
    }
}

/// Environment backed by a fixed set of values.
///
/// Useful to inject settings without a Go toolchain, for tests or when the
/// values are already known.
///
/// # Examples
///
/// ```
/// use grignotin_goenv::{EnvironmentReader, StaticEnv, vars};
///
/// # tokio_test::block_on(async {
/// let env = StaticEnv::from_iter([(vars::GOPROXY, "https://goproxy.io")]);
/// assert_eq!(env.get_one(vars::GOPROXY).await.unwrap(), "https://goproxy.io");
/// assert_eq!(env.get_one(vars::GOMOD).await.unwrap(), "");
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    values: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[async_trait]
impl EnvironmentReader for StaticEnv {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>> {
        if keys.is_empty() {
            return Ok(self.values.clone());
        }

        Ok(keys
            .iter()
            .map(|key| {
                let value = self.values.get(*key).cloned().unwrap_or_default();
                ((*key).to_string(), value)
            })
            .collect())
    }
}

fn parse_env_json(data: &[u8]) -> serde_json::Result<HashMap<String, String>> {
    serde_json::from_slice(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_parse_env_json() {
        let data = br#"{
            "GOCACHE": "/home/gopher/.cache/go-build",
            "GOEXE": "",
            "GOMOD": "/src/grignotin/go.mod"
        }"#;

        let values = parse_env_json(data).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[vars::GOMOD], "/src/grignotin/go.mod");
        assert_eq!(values[vars::GOEXE], "");
    }

    #[test]
    fn test_parse_env_json_invalid() {
        assert_err!(parse_env_json(b"GOMOD=/src/go.mod"));
        assert_err!(parse_env_json(br#"{"GOMOD": 1}"#));
    }

    #[tokio::test]
    async fn test_static_env_get() {
        let env = StaticEnv::default()
            .with(vars::GOMOD, "/src/go.mod")
            .with(vars::GOCACHE, "/cache");

        let values = assert_ok!(env.get(&[vars::GOMOD, vars::GOEXE]).await);
        assert_eq!(values.len(), 2);
        assert_eq!(values[vars::GOMOD], "/src/go.mod");
        assert_eq!(values[vars::GOEXE], "");
    }

    #[tokio::test]
    async fn test_static_env_get_all() {
        let env = StaticEnv::from_iter([(vars::GOOS, "linux"), (vars::GOARCH, "amd64")]);

        let values = env.get_all().await.unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[vars::GOARCH], "amd64");
    }

    #[tokio::test]
    async fn test_get_one_through_trait_object() {
        let env: Box<dyn EnvironmentReader> =
            Box::new(StaticEnv::from_iter([(vars::GOPROXY, "off")]));

        assert_eq!(env.get_one(vars::GOPROXY).await.unwrap(), "off");
        assert_eq!(env.get_one(vars::GOSUMDB).await.unwrap(), "");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_go_env_with_fake_binary() {
        let dir = tempfile::tempdir().unwrap();
        let script = crate::testing::fake_go(
            dir.path(),
            r#"echo "$@" > "$(dirname "$0")/args"
echo '{"GOMOD": "/src/go.mod", "GOCACHE": "/cache"}'
"#,
        );

        let env = GoEnv::with_command(GoCommand::new().with_program(&script));
        let values = env.get(&[vars::GOMOD, vars::GOCACHE]).await.unwrap();

        assert_eq!(values[vars::GOMOD], "/src/go.mod");
        assert_eq!(values[vars::GOCACHE], "/cache");

        let args = std::fs::read_to_string(dir.path().join("args")).unwrap();
        assert_eq!(args.trim(), "env -json GOMOD GOCACHE");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_go_env_invalid_output() {
        let dir = tempfile::tempdir().unwrap();
        let script = crate::testing::fake_go(dir.path(), "echo 'GOMOD=/src/go.mod'\n");

        let env = GoEnv::with_command(GoCommand::new().with_program(&script));
        let result = env.get_one(vars::GOMOD).await;

        assert!(matches!(result, Err(GoEnvError::Json { .. })));
    }

    #[tokio::test]
    #[ignore]
    async fn test_real_go_env() {
        let env = GoEnv::new();
        let values = env.get(&[vars::GOROOT, vars::GOCACHE, vars::GOEXE]).await.unwrap();

        assert!(!values[vars::GOROOT].is_empty());
        assert!(!values[vars::GOCACHE].is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn test_real_go_env_all() {
        let env = GoEnv::new();
        let values = env.get_all().await.unwrap();

        assert!(values.contains_key(vars::GOVERSION));
    }
}
