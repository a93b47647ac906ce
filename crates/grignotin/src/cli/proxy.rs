use anyhow::{Context, Result};
use bytes::Bytes;
use clap::Parser;
use futures::{Stream, TryStreamExt};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::{GlobalOptions, print_json};

#[derive(Debug, Clone, Parser)]
pub(crate) struct VersionsCommand {
    pub(crate) module: String,
}

impl VersionsCommand {
    pub(crate) async fn run(self, options: &GlobalOptions) -> Result<()> {
        let versions = options.proxy_client().await?.get_versions(&self.module).await?;
        print_json(&versions)
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct InfoCommand {
    pub(crate) module: String,
    /// Version, branch or commit hash
    pub(crate) version: String,
}

impl InfoCommand {
    pub(crate) async fn run(self, options: &GlobalOptions) -> Result<()> {
        let info = options
            .proxy_client()
            .await?
            .get_info(&self.module, &self.version)
            .await?;
        print_json(&info)
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct LatestCommand {
    pub(crate) module: String,
}

impl LatestCommand {
    pub(crate) async fn run(self, options: &GlobalOptions) -> Result<()> {
        let info = options.proxy_client().await?.get_latest(&self.module).await?;
        print_json(&info)
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct ModFileCommand {
    pub(crate) module: String,
    pub(crate) version: String,
    /// Print the file as served instead of its parsed form
    #[arg(long)]
    pub(crate) raw: bool,
}

impl ModFileCommand {
    pub(crate) async fn run(self, options: &GlobalOptions) -> Result<()> {
        let client = options.proxy_client().await?;

        if self.raw {
            let content = client.get_raw_mod_file(&self.module, &self.version).await?;
            print!("{content}");
            return Ok(());
        }

        let file = client.get_mod_file(&self.module, &self.version).await?;
        print_json(&file)
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct LookupCommand {
    pub(crate) module: String,
    pub(crate) version: String,
}

impl LookupCommand {
    pub(crate) async fn run(self, options: &GlobalOptions) -> Result<()> {
        let record = options
            .proxy_client()
            .await?
            .lookup(&self.module, &self.version)
            .await?;
        print!("{record}");
        Ok(())
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct DownloadCommand {
    pub(crate) module: String,
    pub(crate) version: String,
    /// Destination file [default: <version>.zip]
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

impl DownloadCommand {
    pub(crate) async fn run(self, options: &GlobalOptions) -> Result<()> {
        let output = self
            .output
            .unwrap_or_else(|| PathBuf::from(format!("{}.zip", self.version)));

        let stream = options
            .proxy_client()
            .await?
            .download_sources(&self.module, &self.version)
            .await?;

        let size = save_stream(stream, &output).await?;

        debug!(size, path = %output.display(), "archive written");

        print_json(&output)
    }
}

/// Writes a byte stream to `path`.
///
/// The file is removed when the stream or a write fails.
async fn save_stream<S>(stream: S, path: &Path) -> Result<usize>
where
    S: Stream<Item = grignotin_goproxy::Result<Bytes>> + Unpin,
{
    let result = write_stream(stream, path).await;

    if result.is_err() {
        match tokio::fs::remove_file(path).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "failed to remove partial download: {e}");
            }
            _ => {}
        }
    }

    result
}

async fn write_stream<S>(mut stream: S, path: &Path) -> Result<usize>
where
    S: Stream<Item = grignotin_goproxy::Result<Bytes>> + Unpin,
{
    let mut file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut size = 0;
    while let Some(chunk) = stream.try_next().await? {
        size += chunk.len();
        file.write_all(&chunk)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    file.flush().await?;

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grignotin_goproxy::{ApiError, ProxyError};

    #[tokio::test]
    async fn test_save_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v0.1.0.zip");

        let chunks = vec![Ok(Bytes::from_static(b"PK")), Ok(Bytes::from_static(b" archive"))];
        let size = save_stream(futures::stream::iter(chunks), &path)
            .await
            .unwrap();

        assert_eq!(size, 10);
        assert_eq!(std::fs::read(&path).unwrap(), b"PK archive");
    }

    #[tokio::test]
    async fn test_save_stream_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v0.1.0.zip");

        let chunks = vec![
            Ok(Bytes::from_static(b"PK partial")),
            Err(ProxyError::Api(ApiError {
                status_code: 502,
                message: "connection reset".into(),
            })),
        ];
        let result = save_stream(futures::stream::iter(chunks), &path).await;

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_save_stream_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("v0.1.0.zip");

        let chunks: Vec<grignotin_goproxy::Result<Bytes>> = vec![Ok(Bytes::from_static(b"PK"))];
        let result = save_stream(futures::stream::iter(chunks), &path).await;

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
