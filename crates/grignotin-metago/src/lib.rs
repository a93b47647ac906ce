//! go-get meta information.
//!
//! Fetches the `go-import` and `go-source` meta tags a package page serves
//! for `go get`, and resolves from them the repository that actually hosts
//! the code (its "effective source").
//!
//! # Example
//!
//! ```
//! use grignotin_metago::{effective_pkg_source, parse_meta_go};
//!
//! let html = r#"<html><head>
//! <meta name="go-import" content="golang.org/x/crypto git https://go.googlesource.com/crypto">
//! </head></html>"#;
//!
//! let meta = parse_meta_go(html).with_pkg("golang.org/x/crypto");
//! assert_eq!(effective_pkg_source(&meta).unwrap(), "go.googlesource.com/crypto");
//! ```

pub mod client;
pub mod error;
pub mod parser;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use client::MetaGoClient;
pub use error::{MetaGoError, Result};
pub use parser::parse_meta_go;
pub use source::effective_pkg_source;
pub use types::MetaGo;
