//! Module path escaping for proxy and checksum database URLs.
//!
//! Module paths are case-sensitive but the proxy must work on
//! case-insensitive file systems, so every uppercase letter is written as
//! `!` followed by its lowercase form.

/// Escapes a module path for use in a proxy URL.
///
/// Only ASCII uppercase letters are rewritten. Everything else passes through
/// untouched: the function does not validate the path.
///
/// # Examples
///
/// ```
/// use grignotin_goproxy::escape_module_path;
///
/// assert_eq!(
///     escape_module_path("github.com/AkamaiOPEN-edgegrid-golang"),
///     "github.com/!akamai!o!p!e!n-edgegrid-golang"
/// );
/// assert_eq!(escape_module_path("golang.org/x/lint"), "golang.org/x/lint");
/// ```
pub fn escape_module_path(path: &str) -> String {
    let mut result = String::with_capacity(path.len() + 8);

    for c in path.chars() {
        if c.is_ascii_uppercase() {
            result.push('!');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Reverses [`escape_module_path`].
///
/// Returns `None` when `!` is not followed by an ASCII lowercase letter, or
/// when the input holds an uppercase letter (which escaping never produces).
///
/// # Examples
///
/// ```
/// use grignotin_goproxy::unescape_module_path;
///
/// assert_eq!(
///     unescape_module_path("github.com/ijc25/!gotty").as_deref(),
///     Some("github.com/ijc25/Gotty")
/// );
/// assert_eq!(unescape_module_path("github.com/!"), None);
/// ```
pub fn unescape_module_path(escaped: &str) -> Option<String> {
    let mut result = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();

    while let Some(c) = chars.next() {
        match c {
            '!' => match chars.next() {
                Some(next) if next.is_ascii_lowercase() => result.push(next.to_ascii_uppercase()),
                _ => return None,
            },
            c if c.is_ascii_uppercase() => return None,
            c => result.push(c),
        }
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_uppercase() {
        assert_eq!(
            escape_module_path("AkamaiOPEN-edgegrid-golang"),
            "!akamai!o!p!e!n-edgegrid-golang"
        );
        assert_eq!(
            escape_module_path("github.com/ijc25/Gotty"),
            "github.com/ijc25/!gotty"
        );
        assert_eq!(
            escape_module_path("github.com/MyUser/MyRepo"),
            "github.com/!my!user/!my!repo"
        );
    }

    #[test]
    fn test_escape_lowercase_is_identity() {
        assert_eq!(escape_module_path("golang.org/x/lint"), "golang.org/x/lint");
        assert_eq!(
            escape_module_path("github.com/hashicorp/consul/api"),
            "github.com/hashicorp/consul/api"
        );
        assert_eq!(escape_module_path(""), "");
    }

    #[test]
    fn test_escape_leaves_non_ascii_alone() {
        assert_eq!(escape_module_path("example.com/Été"), "example.com/Été");
        assert_eq!(escape_module_path("example.com/a b%"), "example.com/a b%");
    }

    #[test]
    fn test_unescape() {
        assert_eq!(
            unescape_module_path("!akamai!o!p!e!n-edgegrid-golang").as_deref(),
            Some("AkamaiOPEN-edgegrid-golang")
        );
        assert_eq!(
            unescape_module_path("golang.org/x/lint").as_deref(),
            Some("golang.org/x/lint")
        );
    }

    #[test]
    fn test_unescape_rejects_malformed() {
        assert_eq!(unescape_module_path("github.com/!"), None);
        assert_eq!(unescape_module_path("github.com/!!a"), None);
        assert_eq!(unescape_module_path("github.com/!1"), None);
        assert_eq!(unescape_module_path("github.com/Gotty"), None);
    }

    proptest! {
        #[test]
        fn escape_is_reversible(path in "[a-zA-Z0-9./_~-]{0,64}") {
            let escaped = escape_module_path(&path);
            prop_assert_eq!(unescape_module_path(&escaped), Some(path));
        }

        #[test]
        fn escape_is_identity_without_uppercase(path in "[a-z0-9./_~-]{0,64}") {
            prop_assert_eq!(escape_module_path(&path), path);
        }

        #[test]
        fn escape_output_has_no_uppercase(path in "\\PC{0,64}") {
            prop_assert!(!escape_module_path(&path).chars().any(|c| c.is_ascii_uppercase()));
        }
    }
}
