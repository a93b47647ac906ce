use serde::Deserialize;
use std::time::Duration;

/// Configuration for the shared HTTP client.
///
/// All fields use sensible defaults if not specified.
///
/// # Defaults
///
/// - `user_agent`: `grignotin/<crate version>`
/// - `timeout_secs`: `30`
///
/// # Examples
///
/// ```
/// use grignotin_core::config::HttpConfig;
///
/// let config: HttpConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
/// assert_eq!(config.timeout_secs, 5);
/// assert!(config.user_agent.starts_with("grignotin/"));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_user_agent() -> String {
    concat!("grignotin/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}
