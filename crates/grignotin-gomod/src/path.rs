//! Module path lookup through the Go environment.

use crate::error::{GoModError, Result};
use crate::parser::module_path;
use grignotin_goenv::{EnvironmentReader, vars};

/// Value of `GOMOD` when module mode is on but there is no go.mod.
const NULL_DEVICE: &str = if cfg!(windows) { "NUL" } else { "/dev/null" };

/// Gets the path of the main module.
///
/// Asks the environment for `GOMOD`, then reads the `module` directive of
/// that file.
///
/// # Errors
///
/// - `GoModError::Go` if the environment cannot be read
/// - `GoModError::GoModNotFound` if `GOMOD` is empty or the null device
/// - `GoModError::Read` if the go.mod file cannot be read
/// - `GoModError::MissingModuleDirective` if the file declares no module
///
/// # Examples
///
/// ```no_run
/// use grignotin_goenv::GoEnv;
/// use grignotin_gomod::get_module_path;
///
/// # async fn example() -> grignotin_gomod::Result<()> {
/// let path = get_module_path(&GoEnv::new()).await?;
/// println!("{path}");
/// # Ok(())
/// # }
/// ```
pub async fn get_module_path(env: &dyn EnvironmentReader) -> Result<String> {
    let gomod = env.get_one(vars::GOMOD).await?;

    if gomod.is_empty() || gomod == NULL_DEVICE {
        return Err(GoModError::GoModNotFound);
    }

    let content = tokio::fs::read_to_string(&gomod)
        .await
        .map_err(|e| GoModError::Read {
            path: gomod.clone(),
            source: e,
        })?;

    module_path(&content).ok_or(GoModError::MissingModuleDirective { path: gomod })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grignotin_goenv::{GoEnv, StaticEnv};

    fn env_with_gomod(path: &str) -> StaticEnv {
        StaticEnv::default().with(vars::GOMOD, path)
    }

    #[tokio::test]
    async fn test_get_module_path() {
        let dir = tempfile::tempdir().unwrap();
        let gomod = dir.path().join("go.mod");
        std::fs::write(
            &gomod,
            "module github.com/ldez/grignotin\n\ngo 1.23.0\n\nrequire github.com/stretchr/testify v1.10.0\n",
        )
        .unwrap();

        let env = env_with_gomod(&gomod.to_string_lossy());
        let path = get_module_path(&env).await.unwrap();

        assert_eq!(path, "github.com/ldez/grignotin");
    }

    #[tokio::test]
    async fn test_get_module_path_outside_module() {
        let result = get_module_path(&env_with_gomod(NULL_DEVICE)).await;
        assert!(matches!(result, Err(GoModError::GoModNotFound)));

        let result = get_module_path(&StaticEnv::default()).await;
        assert!(matches!(result, Err(GoModError::GoModNotFound)));
    }

    #[tokio::test]
    async fn test_get_module_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let gomod = dir.path().join("go.mod");

        let result = get_module_path(&env_with_gomod(&gomod.to_string_lossy())).await;
        assert!(matches!(result, Err(GoModError::Read { .. })));
    }

    #[tokio::test]
    async fn test_get_module_path_without_directive() {
        let dir = tempfile::tempdir().unwrap();
        let gomod = dir.path().join("go.mod");
        std::fs::write(&gomod, "go 1.23.0\n").unwrap();

        let result = get_module_path(&env_with_gomod(&gomod.to_string_lossy())).await;
        assert!(matches!(
            result,
            Err(GoModError::MissingModuleDirective { .. })
        ));
    }

    #[tokio::test]
    #[ignore]
    async fn test_real_module_path() {
        let path = get_module_path(&GoEnv::new()).await.unwrap();
        assert!(!path.is_empty());
    }
}
