//! nuraya plugins コマンド
//!
//! プレフィックスに一致するカタログのプラグインを解決して表示する。

use super::catalog_source;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::plugin::PluginInfo;
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};

/// 出力形式
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Parser)]
pub struct Args {
    /// Slug prefix to match (e.g. volkovlabs-)
    pub prefix: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Ignore the cached plugin catalog
    #[arg(long)]
    pub no_cache: bool,
}

pub async fn run(args: Args) -> Result<()> {
    let source = catalog_source(args.no_cache);
    let catalog = Catalog::fetch(&source).await?;
    let plugins: Vec<PluginInfo> = catalog.find_by_prefix(&args.prefix).collect();

    match args.format {
        OutputFormat::Table => print_table(&plugins),
        OutputFormat::Json => print_json(&plugins)?,
    }

    Ok(())
}

fn print_table(plugins: &[PluginInfo]) {
    if plugins.is_empty() {
        println!("No plugins matched");
        return;
    }

    println!("{}", render_table(plugins));
    println!("{} plugin(s)", plugins.len());
}

fn render_table(plugins: &[PluginInfo]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Slug", "Version", "Repository", "Homepage"]);

    for plugin in plugins {
        table.add_row(vec![
            plugin.slug.as_str(),
            plugin.version.as_str(),
            plugin.repository_url.as_deref().unwrap_or("-"),
            plugin.homepage_url.as_deref().unwrap_or("-"),
        ]);
    }

    table
}

fn print_json(plugins: &[PluginInfo]) -> Result<()> {
    // 空の場合も [] を出力
    println!("{}", serde_json::to_string_pretty(plugins)?);
    Ok(())
}
