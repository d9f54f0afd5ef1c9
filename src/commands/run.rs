//! nuraya run コマンド

use crate::docker::{self, DEFAULT_ADMIN_PASSWORD, DEFAULT_IMAGE};
use crate::error::Result;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Image tag
    #[arg(default_value = DEFAULT_IMAGE)]
    pub image: String,

    /// Grafana admin password
    #[arg(default_value = DEFAULT_ADMIN_PASSWORD)]
    pub admin_password: String,
}

pub async fn run(args: Args) -> Result<()> {
    docker::execute(docker::run_command(&args.image, &args.admin_password))
}
