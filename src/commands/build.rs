//! nuraya build コマンド

use crate::docker::{self, DEFAULT_IMAGE};
use crate::error::Result;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Image tag
    #[arg(default_value = DEFAULT_IMAGE)]
    pub image: String,
}

pub async fn run(args: Args) -> Result<()> {
    docker::execute(docker::build_command(&args.image))
}
