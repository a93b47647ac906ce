use anyhow::Result;
use clap::Parser;
use grignotin_metago::{MetaGo, MetaGoClient, effective_pkg_source};
use serde::Serialize;

use super::{GlobalOptions, print_json};

#[derive(Debug, Clone, Parser)]
pub(crate) struct SourceCommand {
    /// Package import path
    pub(crate) package: String,
}

#[derive(Debug, Serialize)]
struct SourceOutput {
    #[serde(flatten)]
    meta: MetaGo,
    source: String,
}

impl SourceCommand {
    pub(crate) async fn run(self, options: &GlobalOptions) -> Result<()> {
        let meta = MetaGoClient::with_http(options.http()?)
            .get(&self.package)
            .await?;

        let source = effective_pkg_source(&meta)?;

        print_json(&SourceOutput { meta, source })
    }
}
