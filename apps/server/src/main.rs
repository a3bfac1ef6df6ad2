use anyhow::Context;
use ashy::domain::config::ApiConfig;
use ashy::domain::constants::CONFIG_FILE;
use ashy::kernel::config::load_config;
use ashy_logger::{LevelFilter, Logger};
use ashy_server::Server;

#[ashy_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some(CONFIG_FILE)).context("Critical: Configuration is malformed")?;

    let logging = &cfg.logging;
    let level: LevelFilter = logging
        .level
        .parse()
        .with_context(|| format!("Invalid logging.level `{}`", logging.level))?;

    let mut logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(level)
        .console(logging.console)
        .json(logging.json);
    if let Some(filter) = &logging.filter {
        logger = logger.env_filter(filter);
    }
    if let Some(directory) = &logging.directory {
        logger = logger.directory(directory);
    }
    let _log = logger.init()?;

    Server::builder().config(cfg).build()?.run().await
}
