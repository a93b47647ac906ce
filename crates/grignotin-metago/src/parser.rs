//! go-get meta tags extraction.

use crate::types::MetaGo;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

static META: Lazy<Selector> = Lazy::new(|| Selector::parse("meta").unwrap());

static BODY_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<body[\s/>]").unwrap());

/// Extracts the `go-import` and `go-source` meta tags of an HTML page.
///
/// Parsing is lenient: invalid markup (HTML5 scripts, unclosed tags, ...)
/// never fails, it just yields fewer tags. Every `<meta>` element before the
/// `<body>` start tag counts, even one the HTML5 tree builder would move out
/// of `<head>` (after stray text for instance). When a tag is repeated the
/// last one wins.
///
/// The returned record has an empty package name, see [`MetaGo::with_pkg`].
///
/// # Examples
///
/// ```
/// use grignotin_metago::parse_meta_go;
///
/// let html = r#"<html><head>
/// <meta name="go-import" content="google.golang.org/grpc git https://github.com/grpc/grpc-go">
/// </head><body></body></html>"#;
///
/// let meta = parse_meta_go(html);
/// assert_eq!(meta.go_import(), ["google.golang.org/grpc", "git", "https://github.com/grpc/grpc-go"]);
/// assert!(meta.go_source().is_empty());
/// ```
pub fn parse_meta_go(html: &str) -> MetaGo {
    let head = BODY_START.find(html).map_or(html, |m| &html[..m.start()]);
    let document = Html::parse_document(head);

    let mut go_import = Vec::new();
    let mut go_source = Vec::new();

    for element in document.select(&META) {
        let element = element.value();

        let target = match element.attr("name") {
            Some("go-import") => &mut go_import,
            Some("go-source") => &mut go_source,
            _ => continue,
        };

        *target = element
            .attr("content")
            .unwrap_or_default()
            .split_whitespace()
            .map(String::from)
            .collect();
    }

    MetaGo::new(String::new(), go_source, go_import)
}
