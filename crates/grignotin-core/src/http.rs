use crate::config::HttpConfig;
use crate::error::{CoreError, Result};
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// Thin HTTP client shared by the grignotin clients.
///
/// Every call is a single GET request: no caching, no retries. Non-2xx
/// responses are turned into [`CoreError::Status`] carrying the response body,
/// so the caller can surface whatever message the server sent back.
///
/// Cloning is cheap, the underlying `reqwest::Client` is reference-counted.
///
/// # Examples
///
/// ```no_run
/// use grignotin_core::HttpClient;
///
/// # async fn example() -> grignotin_core::Result<()> {
/// let http = HttpClient::new()?;
/// let body = http.fetch_text("https://proxy.golang.org/golang.org/x/lint/@v/list").await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with the default [`HttpConfig`].
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpConfig::default())
    }

    /// Creates a client with the given timeout and user agent.
    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(CoreError::Client)?;

        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends a GET request and returns the response if its status is 2xx.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Request` if the request cannot be sent, or
    /// `CoreError::Status` if the server answers with a non-success status.
    pub async fn fetch(&self, url: &str) -> Result<Response> {
        self.fetch_with_query(url, &[]).await
    }

    /// Same as [`fetch`](Self::fetch), with query parameters appended to the URL.
    pub async fn fetch_with_query(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        tracing::debug!("GET {} {:?}", url, query);

        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| CoreError::Request {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            // The body is only informative here, a read failure must not hide the status.
            let body = response.text().await.unwrap_or_default();
            return Err(CoreError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        Ok(response)
    }

    /// Fetches the whole response body.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Bytes> {
        let response = self.fetch(url).await?;
        read_body(url, response).await
    }

    /// Fetches the response body as UTF-8 text.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let body = self.fetch_bytes(url).await?;
        String::from_utf8(body.to_vec()).map_err(|e| CoreError::Utf8 {
            url: url.to_string(),
            source: e,
        })
    }

    /// Fetches the response body as a stream of chunks.
    ///
    /// The stream owns the connection: it is released once the stream is
    /// drained or dropped.
    pub async fn fetch_stream(&self, url: &str) -> Result<BoxStream<'static, Result<Bytes>>> {
        let response = self.fetch(url).await?;
        let url = url.to_string();

        Ok(response
            .bytes_stream()
            .map_err(move |e| CoreError::Body {
                url: url.clone(),
                source: e,
            })
            .boxed())
    }

    /// Fetches and decodes a JSON response body.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.fetch_json_with_query(url, &[]).await
    }

    /// Fetches and decodes a JSON response body, with query parameters.
    pub async fn fetch_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self.fetch_with_query(url, query).await?;
        let body = read_body(url, response).await?;

        serde_json::from_slice(&body).map_err(|e| CoreError::Json {
            url: url.to_string(),
            source: e,
        })
    }
}

async fn read_body(url: &str, response: Response) -> Result<Bytes> {
    response.bytes().await.map_err(|e| CoreError::Body {
        url: url.to_string(),
        source: e,
    })
}
