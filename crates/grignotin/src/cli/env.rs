use anyhow::Result;
use clap::Parser;
use grignotin_goenv::{EnvironmentReader, GoEnv};
use grignotin_gomod::{get_module_info, get_module_path};
use std::collections::BTreeMap;

use super::{GlobalOptions, print_json};

#[derive(Debug, Clone, Parser)]
pub(crate) struct EnvCommand {
    /// Variables to print, all of them when omitted
    pub(crate) keys: Vec<String>,
}

impl EnvCommand {
    pub(crate) async fn run(self, options: &GlobalOptions) -> Result<()> {
        let keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();

        let values = GoEnv::with_command(options.go()).get(&keys).await?;

        // sorted output
        print_json(&values.into_iter().collect::<BTreeMap<_, _>>())
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct ModInfoCommand {}

impl ModInfoCommand {
    pub(crate) async fn run(self, options: &GlobalOptions) -> Result<()> {
        let infos = get_module_info(&options.go()).await?;
        print_json(&infos)
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct ModPathCommand {}

impl ModPathCommand {
    pub(crate) async fn run(self, options: &GlobalOptions) -> Result<()> {
        let path = get_module_path(&GoEnv::with_command(options.go())).await?;
        print_json(&path)
    }
}
