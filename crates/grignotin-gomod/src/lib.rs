//! Go module information.
//!
//! This crate reads the main module from `go list -m -json`, finds its path
//! through the Go environment, and parses go.mod files.
//!
//! # Example
//!
//! ```
//! use grignotin_gomod::parse_go_mod;
//!
//! let content = r#"
//! module example.com/myapp
//!
//! go 1.21
//!
//! require github.com/gin-gonic/gin v1.9.1
//! "#;
//!
//! let file = parse_go_mod(content).unwrap();
//! assert_eq!(file.require.len(), 1);
//! ```

pub mod error;
pub mod list;
pub mod parser;
pub mod path;
pub mod types;

// Re-export commonly used types
pub use error::{GoModError, Result};
pub use list::get_module_info;
pub use parser::{module_path, parse_go_mod};
pub use path::get_module_path;
pub use types::{GoModFile, ModInfo, ModuleVersion, Replace, ReplaceTarget, Require, Retract};
