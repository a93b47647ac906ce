//! Effective package source resolution.

use crate::error::{MetaGoError, Result};
use crate::types::MetaGo;

/// Resolves the repository that actually hosts a package.
///
/// Returns a best-effort `host/owner/repo` string:
///
/// 1. With a `go-source` tag, fields 2 to 4 of its last token (a URL) split on
///    `/`, e.g. `https://github.com/mvdan/xurls/blob/...` gives
///    `github.com/mvdan/xurls`.
/// 2. Without any `go-import` token, the package name itself.
/// 3. With a single `go-import` token, that token.
/// 4. Otherwise the repository URL (third token) without the `.<vcs>`
///    extension and without its scheme.
///
/// # Errors
///
/// - `MetaGoError::MalformedGoSource` if the go-source URL has fewer than 5
///   `/`-separated fields
/// - `MetaGoError::MalformedGoImport` if go-import has exactly two tokens
///
/// # Examples
///
/// ```
/// use grignotin_metago::{MetaGo, effective_pkg_source};
///
/// let meta = MetaGo::new(
///     "code.gitea.io/sdk/gitea",
///     Vec::new(),
///     vec!["code.gitea.io/sdk".into(), "git".into(), "https://gitea.com/gitea/go-sdk.git".into()],
/// );
/// assert_eq!(effective_pkg_source(&meta).unwrap(), "gitea.com/gitea/go-sdk");
/// ```
pub fn effective_pkg_source(meta: &MetaGo) -> Result<String> {
    if let Some(token) = meta.go_source().last() {
        let fields: Vec<&str> = token.split('/').collect();

        if fields.len() < 5 {
            return Err(MetaGoError::MalformedGoSource {
                token: token.clone(),
                fields: fields.len(),
            });
        }

        return Ok(fields[2..5].join("/"));
    }

    match meta.go_import() {
        [] => Ok(meta.pkg().to_string()),
        [root] => Ok(root.clone()),
        [_, vcs, repo, ..] => {
            let repo = repo.as_str();
            let repo = repo.strip_suffix(&format!(".{vcs}")).unwrap_or(repo);

            match repo.split_once("//") {
                Some((_, rest)) => Ok(rest.to_string()),
                None => Ok(repo.to_string()),
            }
        }
        tokens => Err(MetaGoError::MalformedGoImport {
            tokens: tokens.to_vec(),
        }),
    }
}
