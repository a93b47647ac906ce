//! Go toolchain environment access.
//!
//! Reads `go env` output behind the [`EnvironmentReader`] trait, so code that
//! depends on toolchain settings (`GOMOD`, `GOPROXY`, ...) can be tested with a
//! [`StaticEnv`] instead of an installed toolchain.
//!
//! # Example
//!
//! ```no_run
//! use grignotin_goenv::{EnvironmentReader, GoEnv, vars};
//!
//! # async fn example() -> grignotin_goenv::Result<()> {
//! let env = GoEnv::new();
//! let values = env.get(&[vars::GOMOD, vars::GOCACHE]).await?;
//! println!("{:?}", values);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod error;
pub mod reader;
pub mod vars;

// Re-export commonly used types
pub use command::GoCommand;
pub use error::{GoEnvError, Result};
pub use reader::{EnvironmentReader, GoEnv, StaticEnv};
