use anyhow::Result;
use clap::Parser;
use grignotin_version::VersionClient;

use super::{GlobalOptions, print_json};

#[derive(Debug, Clone, Parser)]
pub(crate) struct ReleasesCommand {
    /// Include every past release
    #[arg(long)]
    pub(crate) all: bool,
}

impl ReleasesCommand {
    pub(crate) async fn run(self, options: &GlobalOptions) -> Result<()> {
        let releases = VersionClient::with_http(options.http()?)
            .get_releases(self.all)
            .await?;
        print_json(&releases)
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct BuildsCommand {}

impl BuildsCommand {
    pub(crate) async fn run(self, options: &GlobalOptions) -> Result<()> {
        let build = VersionClient::with_http(options.http()?).get_build().await?;
        print_json(&build)
    }
}
