//! go.mod parser.
//!
//! Parses go.mod files line by line: one directive per line, or one entry per
//! line inside a `directive ( ... )` block.
//!
//! # Key Features
//!
//! - Handles `module`, `go`, `toolchain`, `require`, `replace`, `exclude`, `retract`
//! - Supports multi-line blocks and inline comments
//! - Extracts indirect dependency markers (`// indirect`)
//! - Unquotes interpreted (`"..."`) and raw (`` `...` ``) strings
//! - Other directives (`godebug`, `tool`, ...) are skipped

use crate::error::{GoModError, Result};
use crate::types::{GoModFile, ModuleVersion, Replace, ReplaceTarget, Require, Retract};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    Module,
    Go,
    Toolchain,
    Require,
    Replace,
    Exclude,
    Retract,
    Other,
}

impl Directive {
    fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "module" => Self::Module,
            "go" => Self::Go,
            "toolchain" => Self::Toolchain,
            "require" => Self::Require,
            "replace" => Self::Replace,
            "exclude" => Self::Exclude,
            "retract" => Self::Retract,
            _ => Self::Other,
        }
    }
}

/// Parses the content of a go.mod file.
///
/// # Errors
///
/// Returns `GoModError::Parse` with the 1-based line number when a directive
/// does not have the expected shape, or when a block is never closed.
///
/// # Examples
///
/// ```
/// use grignotin_gomod::parse_go_mod;
///
/// let file = parse_go_mod("module github.com/ldez/grignotin\n\ngo 1.13\n").unwrap();
/// assert_eq!(file.module.as_deref(), Some("github.com/ldez/grignotin"));
/// assert_eq!(file.go_version.as_deref(), Some("1.13"));
/// ```
pub fn parse_go_mod(content: &str) -> Result<GoModFile> {
    static BLOCK_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\s*\($").unwrap());

    let mut file = GoModFile::default();
    let mut block: Option<(Directive, usize)> = None;

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let (code, comment) = split_comment(raw);
        let code = code.trim();

        if code.is_empty() {
            continue;
        }

        if let Some((directive, _)) = block {
            if code == ")" {
                block = None;
            } else {
                apply(&mut file, directive, code, comment, line)?;
            }
            continue;
        }

        if let Some(caps) = BLOCK_START.captures(code) {
            block = Some((Directive::from_keyword(&caps[1]), line));
            continue;
        }

        let (keyword, args) = code
            .split_once(char::is_whitespace)
            .map_or((code, ""), |(keyword, args)| (keyword, args.trim()));

        apply(&mut file, Directive::from_keyword(keyword), args, comment, line)?;
    }

    if let Some((_, line)) = block {
        return Err(GoModError::parse(line, "block is never closed"));
    }

    tracing::debug!(
        module = ?file.module,
        go_version = ?file.go_version,
        require = file.require.len(),
        "Parsed go.mod successfully"
    );

    Ok(file)
}

/// Extracts the module path from go.mod content without parsing the rest.
///
/// Returns `None` if there is no `module` directive.
///
/// # Examples
///
/// ```
/// use grignotin_gomod::module_path;
///
/// assert_eq!(
///     module_path("// comment\nmodule \"example.com/quoted\"\n").as_deref(),
///     Some("example.com/quoted")
/// );
/// assert_eq!(module_path("go 1.21\n"), None);
/// ```
pub fn module_path(content: &str) -> Option<String> {
    content.lines().enumerate().find_map(|(index, raw)| {
        let (code, _) = split_comment(raw);
        let rest = code.trim().strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }

        let path = rest.trim();
        if path.is_empty() {
            return None;
        }

        unquote(path, index + 1).ok()
    })
}

fn apply(
    file: &mut GoModFile,
    directive: Directive,
    args: &str,
    comment: Option<&str>,
    line: usize,
) -> Result<()> {
    let fields: Vec<&str> = args.split_whitespace().collect();

    match directive {
        Directive::Module => {
            let &[path] = fields.as_slice() else {
                return Err(GoModError::parse(line, "usage: module module/path"));
            };
            file.module = Some(unquote(path, line)?);
        }
        Directive::Go => {
            let &[version] = fields.as_slice() else {
                return Err(GoModError::parse(line, "usage: go 1.23"));
            };
            file.go_version = Some(version.to_string());
        }
        Directive::Toolchain => {
            let &[name] = fields.as_slice() else {
                return Err(GoModError::parse(line, "usage: toolchain go1.23.1"));
            };
            file.toolchain = Some(name.to_string());
        }
        Directive::Require => {
            let &[path, version] = fields.as_slice() else {
                return Err(GoModError::parse(line, "usage: require module/path v1.2.3"));
            };
            file.require.push(Require {
                path: unquote(path, line)?,
                version: unquote(version, line)?,
                indirect: is_indirect(comment),
            });
        }
        Directive::Exclude => {
            let &[path, version] = fields.as_slice() else {
                return Err(GoModError::parse(line, "usage: exclude module/path v1.2.3"));
            };
            file.exclude.push(ModuleVersion {
                path: unquote(path, line)?,
                version: unquote(version, line)?,
            });
        }
        Directive::Replace => file.replace.push(parse_replace(args, line)?),
        Directive::Retract => file.retract.push(parse_retract(args, comment, line)?),
        Directive::Other => {
            tracing::debug!(line, args, "skipping unsupported go.mod directive");
        }
    }

    Ok(())
}

fn parse_replace(args: &str, line: usize) -> Result<Replace> {
    const USAGE: &str = "usage: replace module/path [v1.2.3] => other/module v1.4 | ../local/dir";

    let (old, new) = args
        .split_once("=>")
        .ok_or_else(|| GoModError::parse(line, USAGE))?;

    let target = |side: &str| -> Result<ReplaceTarget> {
        let fields: Vec<&str> = side.split_whitespace().collect();
        match fields.as_slice() {
            &[path] => Ok(ReplaceTarget {
                path: unquote(path, line)?,
                version: None,
            }),
            &[path, version] => Ok(ReplaceTarget {
                path: unquote(path, line)?,
                version: Some(unquote(version, line)?),
            }),
            _ => Err(GoModError::parse(line, USAGE)),
        }
    };

    Ok(Replace {
        old: target(old)?,
        new: target(new)?,
    })
}

fn parse_retract(args: &str, comment: Option<&str>, line: usize) -> Result<Retract> {
    const USAGE: &str = "usage: retract v1.2.3 | [v1.2.3, v1.2.9]";

    let rationale = comment
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from);

    if let Some(interval) = args.strip_prefix('[') {
        let (low, high) = interval
            .strip_suffix(']')
            .and_then(|interval| interval.split_once(','))
            .ok_or_else(|| GoModError::parse(line, USAGE))?;

        let (low, high) = (low.trim(), high.trim());
        if low.is_empty() || high.is_empty() {
            return Err(GoModError::parse(line, USAGE));
        }

        return Ok(Retract {
            low: low.to_string(),
            high: high.to_string(),
            rationale,
        });
    }

    let fields: Vec<&str> = args.split_whitespace().collect();
    let &[version] = fields.as_slice() else {
        return Err(GoModError::parse(line, USAGE));
    };

    Ok(Retract {
        low: version.to_string(),
        high: version.to_string(),
        rationale,
    })
}

fn is_indirect(comment: Option<&str>) -> bool {
    comment
        .map(str::trim)
        .is_some_and(|c| c == "indirect" || c.starts_with("indirect;"))
}

fn unquote(token: &str, line: usize) -> Result<String> {
    if token.starts_with('"') {
        return serde_json::from_str::<String>(token)
            .map_err(|e| GoModError::parse(line, format!("invalid quoted string {token}: {e}")));
    }

    if let Some(raw) = token.strip_prefix('`') {
        return raw
            .strip_suffix('`')
            .map(String::from)
            .ok_or_else(|| GoModError::parse(line, format!("invalid raw string {token}")));
    }

    Ok(token.to_string())
}

/// Splits a line into code and the text of its `//` comment.
///
/// Handles URL schemes (e.g., https://) to avoid splitting URL paths.
fn split_comment(line: &str) -> (&str, Option<&str>) {
    let mut in_url = false;
    for (i, c) in line.char_indices() {
        if c == ':' && line[i..].starts_with("://") {
            in_url = true;
            continue;
        }
        if in_url && c.is_whitespace() {
            in_url = false;
        }
        if !in_url && line[i..].starts_with("//") {
            return (&line[..i], Some(&line[i + 2..]));
        }
    }
    (line, None)
}
