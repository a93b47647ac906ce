use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use grignotin_core::{HttpClient, HttpConfig};
use grignotin_goenv::{GoCommand, GoEnv};
use grignotin_goproxy::{ProxyClient, ProxyConfig};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

mod env;
mod feeds;
mod proxy;
mod source;

pub(crate) use env::{EnvCommand, ModInfoCommand, ModPathCommand};
pub(crate) use feeds::{BuildsCommand, ReleasesCommand};
pub(crate) use proxy::{
    DownloadCommand, InfoCommand, LatestCommand, LookupCommand, ModFileCommand, VersionsCommand,
};
pub(crate) use source::SourceCommand;

/// Go toolchain and module ecosystem introspection.
#[derive(Debug, Parser)]
#[command(name = "grignotin", version, about)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) options: GlobalOptions,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct GlobalOptions {
    /// Module proxy URL [default: first proxy of `go env GOPROXY`]
    #[arg(long, global = true, env = "GOPROXY_URL")]
    pub(crate) proxy_url: Option<String>,
    /// Checksum database URL [default: from `go env GOSUMDB`]
    #[arg(long, global = true, env = "GOSUMDB_URL")]
    pub(crate) sumdb_url: Option<String>,
    /// HTTP request timeout
    #[arg(long, global = true, default_value_t = 30)]
    pub(crate) timeout_secs: u64,
    /// Go binary
    #[arg(long, global = true, env = "GO_BINARY", default_value = "go")]
    pub(crate) go: PathBuf,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print Go environment variables
    Env(EnvCommand),
    /// Print the main modules from `go list -m -json`
    ModInfo(ModInfoCommand),
    /// Print the path of the main module
    ModPath(ModPathCommand),
    /// List the versions of a module
    Versions(VersionsCommand),
    /// Print metadata about a module version
    Info(InfoCommand),
    /// Print metadata about the latest version of a module
    Latest(LatestCommand),
    /// Print the go.mod file of a module version
    ModFile(ModFileCommand),
    /// Print the checksum database record of a module version
    Lookup(LookupCommand),
    /// Download the source archive of a module version
    Download(DownloadCommand),
    /// Resolve the repository hosting a package
    Source(SourceCommand),
    /// List Go releases
    Releases(ReleasesCommand),
    /// Print the build dashboard state
    Builds(BuildsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<()> {
        let options = self.options;

        match self.command {
            Command::Env(cmd) => cmd.run(&options).await,
            Command::ModInfo(cmd) => cmd.run(&options).await,
            Command::ModPath(cmd) => cmd.run(&options).await,
            Command::Versions(cmd) => cmd.run(&options).await,
            Command::Info(cmd) => cmd.run(&options).await,
            Command::Latest(cmd) => cmd.run(&options).await,
            Command::ModFile(cmd) => cmd.run(&options).await,
            Command::Lookup(cmd) => cmd.run(&options).await,
            Command::Download(cmd) => cmd.run(&options).await,
            Command::Source(cmd) => cmd.run(&options).await,
            Command::Releases(cmd) => cmd.run(&options).await,
            Command::Builds(cmd) => cmd.run(&options).await,
        }
    }
}

impl GlobalOptions {
    pub(crate) fn http(&self) -> Result<HttpClient> {
        let config = HttpConfig {
            timeout_secs: self.timeout_secs,
            ..HttpConfig::default()
        };

        HttpClient::with_config(&config).context("failed to create HTTP client")
    }

    pub(crate) fn go(&self) -> GoCommand {
        GoCommand::new().with_program(self.go.clone())
    }

    /// Proxy endpoints from the flags, completed by the Go environment.
    pub(crate) async fn proxy_config(&self) -> ProxyConfig {
        let from_env = if self.proxy_url.is_some() && self.sumdb_url.is_some() {
            ProxyConfig::default()
        } else {
            match ProxyConfig::from_env(&GoEnv::with_command(self.go())).await {
                Ok(config) => config,
                Err(e) => {
                    warn!("cannot read the Go environment, using default endpoints: {e}");
                    ProxyConfig::default()
                }
            }
        };

        let config = ProxyConfig::new(
            self.proxy_url.clone().unwrap_or(from_env.proxy_url),
            self.sumdb_url.clone().unwrap_or(from_env.sumdb_url),
        );

        debug!(
            proxy = config.proxy_url(),
            sumdb = config.sumdb_url(),
            "proxy configuration"
        );

        config
    }

    pub(crate) async fn proxy_client(&self) -> Result<ProxyClient> {
        Ok(ProxyClient::with_http(self.http()?, &self.proxy_config().await))
    }
}

/// Prints a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
