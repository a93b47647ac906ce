//! Core building blocks for the grignotin Go tooling clients.
//!
//! This crate provides what every client crate shares:
//! - **HTTP client**: a thin `reqwest` wrapper, one GET per call, status checked
//! - **Configuration**: `serde`-deserializable HTTP settings with defaults
//! - **Error types**: `CoreError`, wrapped by each client's own error enum
//!
//! # Examples
//!
//! ```no_run
//! use grignotin_core::{HttpClient, HttpConfig};
//!
//! # async fn example() -> grignotin_core::Result<()> {
//! let config = HttpConfig {
//!     timeout_secs: 10,
//!     ..HttpConfig::default()
//! };
//! let http = HttpClient::with_config(&config)?;
//! let text = http.fetch_text("https://proxy.golang.org/golang.org/x/lint/@latest").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;

// Re-export commonly used types
pub use config::HttpConfig;
pub use error::{CoreError, Result};
pub use http::HttpClient;
