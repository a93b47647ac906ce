//! Invocation of the `go` binary.

use crate::error::{GoEnvError, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Runs `go` subcommands and captures their standard output.
///
/// The child process is killed if the returned future is dropped, so
/// cancelling a call is just a matter of dropping it (e.g. via
/// `tokio::time::timeout`).
///
/// # Examples
///
/// ```no_run
/// use grignotin_goenv::GoCommand;
///
/// # async fn example() -> grignotin_goenv::Result<()> {
/// let go = GoCommand::new().with_dir("/path/to/module");
/// let stdout = go.output(&["list", "-m"]).await?;
/// println!("{}", String::from_utf8_lossy(&stdout));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GoCommand {
    program: PathBuf,
    dir: Option<PathBuf>,
}

impl GoCommand {
    /// Uses the `go` binary found in `PATH`, in the current directory.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("go"),
            dir: None,
        }
    }

    /// Uses another `go` binary (e.g. `go1.22.0` from `golang.org/dl`).
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Runs the commands from the given working directory.
    #[must_use]
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs `go <args>` and returns its standard output.
    ///
    /// # Errors
    ///
    /// Returns `GoEnvError::Spawn` if the binary cannot be started, or
    /// `GoEnvError::Command` if it exits with a failure status.
    pub async fn output(&self, args: &[&str]) -> Result<Vec<u8>> {
        let command = self.describe(args);
        tracing::debug!(command = %command, "running go command");

        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .await
            .map_err(|e| GoEnvError::spawn(command.clone(), e))?;

        if !output.status.success() {
            return Err(GoEnvError::Command {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }

    /// Human readable form of the command line, used in errors and logs.
    pub fn describe(&self, args: &[&str]) -> String {
        let mut command = self.program.display().to_string();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }
}

impl Default for GoCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let go = GoCommand::new();
        assert_eq!(go.describe(&["env", "-json", "GOMOD"]), "go env -json GOMOD");
        assert_eq!(go.describe(&[]), "go");
    }

    #[test]
    fn test_with_program() {
        let go = GoCommand::new().with_program("/usr/local/go/bin/go");
        assert_eq!(go.program(), Path::new("/usr/local/go/bin/go"));
    }

    #[tokio::test]
    async fn test_missing_binary() {
        let go = GoCommand::new().with_program("/nonexistent/bin/go-12345");
        let result = go.output(&["version"]).await;
        assert!(matches!(result, Err(GoEnvError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failure_status_keeps_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let script = crate::testing::fake_go(dir.path(), "echo 'go: boom' >&2\nexit 3\n");

        let go = GoCommand::new().with_program(&script);
        let result = go.output(&["env"]).await;

        match result {
            Err(GoEnvError::Command { stderr, status, .. }) => {
                assert_eq!(stderr, "go: boom");
                assert!(status.contains('3'));
            }
            other => panic!("Expected Command error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let script = crate::testing::fake_go(dir.path(), "pwd\n");

        let go = GoCommand::new().with_program(&script).with_dir(dir.path());
        let stdout = go.output(&[]).await.unwrap();
        let printed = String::from_utf8(stdout).unwrap();

        let expected = dir.path().canonicalize().unwrap();
        let printed = Path::new(printed.trim()).canonicalize().unwrap();
        assert_eq!(printed, expected);
    }
}
