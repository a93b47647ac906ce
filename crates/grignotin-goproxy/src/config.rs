use crate::error::Result;
use grignotin_goenv::{EnvironmentReader, vars};
use serde::Deserialize;

/// Default module proxy.
pub const DEFAULT_PROXY_URL: &str = "https://proxy.golang.org";

/// Default checksum database.
pub const DEFAULT_SUMDB_URL: &str = "https://sum.golang.org";

/// Endpoints used by [`ProxyClient`](crate::ProxyClient).
///
/// Empty URLs stand for the defaults and trailing slashes are ignored, so
/// values copied from `go env` or a config file can be used as they are.
///
/// # Defaults
///
/// - `proxy_url`: `https://proxy.golang.org`
/// - `sumdb_url`: `https://sum.golang.org`
///
/// # Examples
///
/// ```
/// use grignotin_goproxy::ProxyConfig;
///
/// let config: ProxyConfig =
///     serde_json::from_str(r#"{"proxy_url": "https://goproxy.io/"}"#).unwrap();
/// assert_eq!(config.proxy_url(), "https://goproxy.io");
/// assert_eq!(config.sumdb_url(), "https://sum.golang.org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProxyConfig {
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,
    #[serde(default = "default_sumdb_url")]
    pub sumdb_url: String,
}

impl ProxyConfig {
    pub fn new(proxy_url: impl Into<String>, sumdb_url: impl Into<String>) -> Self {
        Self {
            proxy_url: proxy_url.into(),
            sumdb_url: sumdb_url.into(),
        }
    }

    /// Builds the configuration from `GOPROXY` and `GOSUMDB`.
    ///
    /// The first `GOPROXY` entry that is an actual URL is used (`direct` and
    /// `off` are skipped). `GOSUMDB` is `name[+key] [url]`; without a URL the
    /// database is reached at `https://<name>`.
    ///
    /// # Errors
    ///
    /// `ProxyError::Go` if the environment cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use grignotin_goenv::StaticEnv;
    /// use grignotin_goproxy::ProxyConfig;
    ///
    /// # tokio_test::block_on(async {
    /// let env = StaticEnv::default()
    ///     .with("GOPROXY", "https://goproxy.cn,direct")
    ///     .with("GOSUMDB", "sum.golang.google.cn");
    ///
    /// let config = ProxyConfig::from_env(&env).await.unwrap();
    /// assert_eq!(config.proxy_url(), "https://goproxy.cn");
    /// assert_eq!(config.sumdb_url(), "https://sum.golang.google.cn");
    /// # });
    /// ```
    pub async fn from_env(env: &dyn EnvironmentReader) -> Result<Self> {
        let mut values = env.get(&[vars::GOPROXY, vars::GOSUMDB]).await?;

        let goproxy = values.remove(vars::GOPROXY).unwrap_or_default();
        let gosumdb = values.remove(vars::GOSUMDB).unwrap_or_default();

        Ok(Self {
            proxy_url: proxy_from_goproxy(&goproxy),
            sumdb_url: sumdb_from_gosumdb(&gosumdb),
        })
    }

    /// Proxy base URL, defaulted and without trailing slash.
    pub fn proxy_url(&self) -> &str {
        normalize(&self.proxy_url, DEFAULT_PROXY_URL)
    }

    /// Checksum database base URL, defaulted and without trailing slash.
    pub fn sumdb_url(&self) -> &str {
        normalize(&self.sumdb_url, DEFAULT_SUMDB_URL)
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            proxy_url: default_proxy_url(),
            sumdb_url: default_sumdb_url(),
        }
    }
}

fn default_proxy_url() -> String {
    DEFAULT_PROXY_URL.to_string()
}

fn default_sumdb_url() -> String {
    DEFAULT_SUMDB_URL.to_string()
}

fn normalize<'a>(url: &'a str, default: &'a str) -> &'a str {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() { default } else { url }
}

fn proxy_from_goproxy(value: &str) -> String {
    let proxy = value
        .split([',', '|'])
        .map(str::trim)
        .find(|entry| !entry.is_empty() && *entry != "direct" && *entry != "off");

    match proxy {
        Some(url) => url.to_string(),
        None => {
            if !value.trim().is_empty() {
                tracing::warn!(goproxy = %value, "no usable proxy in GOPROXY, using default");
            }
            String::new()
        }
    }
}

fn sumdb_from_gosumdb(value: &str) -> String {
    let mut fields = value.split_whitespace();

    let Some(name) = fields.next() else {
        return String::new();
    };

    if name == "off" {
        tracing::warn!("GOSUMDB is off, using the default checksum database");
        return String::new();
    }

    if let Some(url) = fields.next() {
        return url.to_string();
    }

    let host = name.split('+').next().unwrap_or(name);
    format!("https://{host}")
}
