//! nuraya plugin-urls コマンド
//!
//! マニフェストとカタログのプレフィックス検索からパッケージURLを解決し、
//! 1行1URLで標準出力に書き出す。

use super::catalog_source;
use crate::error::{NurayaError, Result};
use crate::plugin::PluginList;
use clap::Parser;
use std::io;
use std::path::PathBuf;

/// 既定で追加するカタログのプレフィックス
pub const DEFAULT_PREFIX: &str = "volkovlabs-";

#[derive(Debug, Parser)]
pub struct Args {
    /// Plugin manifest file (JSON)
    pub path: PathBuf,

    /// Extra plugin as slug[@version] (repeatable, latest if version omitted)
    #[arg(long = "plugin", value_name = "SLUG[@VERSION]")]
    pub plugins: Vec<String>,

    /// Catalog slug prefix to add (repeatable)
    #[arg(long = "prefix", default_value = DEFAULT_PREFIX)]
    pub prefixes: Vec<String>,

    /// Ignore the cached plugin catalog
    #[arg(long)]
    pub no_cache: bool,
}

pub async fn run(args: Args) -> Result<()> {
    tracing::info!("Using manifest path: {}", args.path.display());

    if !args.path.exists() {
        return Err(NurayaError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Manifest not found: {}", args.path.display()),
        )));
    }

    let mut plugins = PluginList::new(Box::new(catalog_source(args.no_cache)));
    plugins.add_manifest(&args.path)?;
    for spec in &args.plugins {
        let (slug, version) = parse_plugin_arg(spec);
        plugins.add_plugin(slug, version);
    }
    for prefix in &args.prefixes {
        plugins.add_prefix(prefix).await?;
    }

    tracing::info!("Resolving {} plugin(s)", plugins.items().len());
    let urls = plugins.package_urls().await?;
    print_urls(&urls);
    Ok(())
}

/// `slug[@version]` を分割（version 省略時は空 = 最新）
fn parse_plugin_arg(value: &str) -> (&str, &str) {
    value.split_once('@').unwrap_or((value, ""))
}

fn print_urls(urls: &[String]) {
    for url in urls {
        println!("{url}");
    }
}
