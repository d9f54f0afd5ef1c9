use clap::{Parser, Subcommand};

use crate::commands::{build, plugin_urls, plugins, run};

#[derive(Debug, Parser)]
#[command(name = "nuraya")]
#[command(about = "Grafana Nuraya builder", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a plugin manifest to a list of package URLs
    PluginUrls(plugin_urls::Args),

    /// Show catalog plugins matching a slug prefix
    Plugins(plugins::Args),

    /// Build the OCI image
    Build(build::Args),

    /// Run Grafana using the OCI image
    Run(run::Args),
}
