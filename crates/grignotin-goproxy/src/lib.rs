//! Go module proxy client.
//!
//! This crate talks to a module proxy (`proxy.golang.org` by default) and to
//! the checksum database (`sum.golang.org`):
//! - **Versions**: list, `.info` and `@latest`
//! - **Files**: go.mod (raw or parsed) and source archives (whole or streamed)
//! - **Checksums**: `lookup` records
//!
//! Module paths are escaped with [`escape_module_path`] before they reach a URL.
//!
//! # Example
//!
//! ```no_run
//! use grignotin_goproxy::{ProxyClient, ProxyConfig};
//!
//! # async fn example() -> grignotin_goproxy::Result<()> {
//! let client = ProxyClient::with_config(&ProxyConfig::default())?;
//! let latest = client.get_latest("golang.org/x/lint").await?;
//! println!("{} ({})", latest.version, latest.time);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod escape;
pub mod types;

// Re-export commonly used types
pub use client::ProxyClient;
pub use config::{DEFAULT_PROXY_URL, DEFAULT_SUMDB_URL, ProxyConfig};
pub use error::{ApiError, ProxyError, Result};
pub use escape::{escape_module_path, unescape_module_path};
pub use types::VersionInfo;
