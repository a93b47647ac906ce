//! Main module information from `go list -m -json`.

use crate::error::{GoModError, Result};
use crate::types::ModInfo;
use grignotin_goenv::GoCommand;

/// Gets the main modules of the current build list.
///
/// In a workspace (`go.work`) there can be several main modules, hence the
/// vector.
///
/// # Errors
///
/// - `GoModError::Go` if `go list` cannot run or fails
/// - `GoModError::Json` if its output cannot be decoded
/// - `GoModError::NotInModule` if a reported module has no go.mod
/// - `GoModError::GoModNotFound` if no main module is reported
///
/// # Examples
///
/// ```no_run
/// use grignotin_goenv::GoCommand;
/// use grignotin_gomod::get_module_info;
///
/// # async fn example() -> grignotin_gomod::Result<()> {
/// let infos = get_module_info(&GoCommand::new()).await?;
/// println!("main module: {}", infos[0].path);
/// # Ok(())
/// # }
/// ```
pub async fn get_module_info(go: &GoCommand) -> Result<Vec<ModInfo>> {
    // https://github.com/golang/go/issues/44753#issuecomment-790089020
    let stdout = go.output(&["list", "-m", "-json"]).await?;

    parse_module_info(&stdout)
}

/// Decodes the stream of JSON objects printed by `go list -m -json`.
fn parse_module_info(data: &[u8]) -> Result<Vec<ModInfo>> {
    let mut infos = Vec::new();

    for value in serde_json::Deserializer::from_slice(data).into_iter::<ModInfo>() {
        let info = value.map_err(GoModError::Json)?;

        if info.go_mod.is_empty() {
            return Err(GoModError::NotInModule);
        }

        if !info.main || info.dir.is_empty() {
            tracing::debug!(path = %info.path, "skipping non-main module");
            continue;
        }

        infos.push(info);
    }

    if infos.is_empty() {
        return Err(GoModError::GoModNotFound);
    }

    Ok(infos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_module() {
        let data = br#"{
	"Path": "github.com/ldez/grignotin",
	"Main": true,
	"Dir": "/src/grignotin",
	"GoMod": "/src/grignotin/go.mod",
	"GoVersion": "1.23.0"
}
"#;
        let infos = parse_module_info(data).unwrap();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].path, "github.com/ldez/grignotin");
        assert_eq!(infos[0].go_version, "1.23.0");
        assert!(infos[0].main);
    }

    #[test]
    fn test_parse_workspace_modules() {
        let data = br#"{"Path": "example.com/a", "Main": true, "Dir": "/w/a", "GoMod": "/w/a/go.mod", "GoVersion": "1.22"}
{"Path": "example.com/b", "Main": true, "Dir": "/w/b", "GoMod": "/w/b/go.mod", "GoVersion": "1.22"}
"#;
        let infos = parse_module_info(data).unwrap();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[1].path, "example.com/b");
    }

    #[test]
    fn test_parse_skips_non_main() {
        let data = br#"{"Path": "example.com/a", "Main": true, "Dir": "/w/a", "GoMod": "/w/a/go.mod"}
{"Path": "example.com/dep", "Dir": "/cache/dep", "GoMod": "/cache/dep/go.mod"}
{"Path": "example.com/nodir", "Main": true, "GoMod": "/cache/nodir/go.mod"}
"#;
        let infos = parse_module_info(data).unwrap();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].path, "example.com/a");
    }

    #[test]
    fn test_parse_not_in_module() {
        let data = br#"{"Path": "command-line-arguments", "Main": true, "Dir": "/tmp"}"#;
        let result = parse_module_info(data);
        assert!(matches!(result, Err(GoModError::NotInModule)));
    }

    #[test]
    fn test_parse_no_main_module() {
        let result = parse_module_info(b"");
        assert!(matches!(result, Err(GoModError::GoModNotFound)));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_module_info(b"{\"Path\": ");
        assert!(matches!(result, Err(GoModError::Json(_))));
    }

    #[tokio::test]
    #[ignore]
    async fn test_real_go_list() {
        let infos = get_module_info(&GoCommand::new()).await.unwrap();
        assert!(!infos.is_empty());
        assert!(infos.iter().all(|info| info.main));
    }
}
