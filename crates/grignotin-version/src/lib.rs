//! Go toolchain build and release feeds.
//!
//! Reads the JSON feeds of the build dashboard (`build.golang.org`) and of the
//! downloads page (`golang.org/dl`).

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use client::{DEFAULT_BUILD_URL, DEFAULT_DL_URL, VersionClient};
pub use error::{Result, VersionError};
pub use types::{Build, File, Release, Revision};
