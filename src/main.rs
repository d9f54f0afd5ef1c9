mod catalog;
mod cli;
mod commands;
mod config;
mod docker;
mod env;
mod error;
mod http;
mod logging;
mod output;
mod plugin;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);
    tracing::info!("Starting Grafana Nuraya builder");

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{}", output::format_error(&err, output::should_use_color()));
        std::process::exit(err.exit_code());
    }
}
