use crate::catalog::{CatalogCache, GrafanaApi};
use crate::cli::{Cli, Command};
use crate::config::HttpConfig;
use crate::error::Result;

pub mod build;
pub mod plugin_urls;
pub mod plugins;
pub mod run;

pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::PluginUrls(args) => plugin_urls::run(args).await,
        Command::Plugins(args) => plugins::run(args).await,
        Command::Build(args) => build::run(args).await,
        Command::Run(args) => run::run(args).await,
    }
}

/// キャッシュ付きのカタログ取得元を作成
///
/// キャッシュディレクトリが使えない場合はキャッシュなしで続行する。
pub(crate) fn catalog_source(no_cache: bool) -> GrafanaApi {
    let api = GrafanaApi::new(&HttpConfig::default()).with_refresh(no_cache);

    match CatalogCache::new() {
        Ok(cache) => api.with_cache(cache),
        Err(err) => {
            tracing::warn!("Catalog cache disabled: {}", err);
            api
        }
    }
}
