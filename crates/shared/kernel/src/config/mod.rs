use ashy_domain::constants::{CONFIG_FILE, ENV_PREFIX};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

#[ashy_derive::ashy_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays `ASHY__*` environment variables.
///
/// Layers, lowest priority first:
/// 1. The file at `path` (default: `server` in the working directory). The extension may be
///    omitted, in which case `server.toml`, `server.json`, `server.yaml`, ... are tried.
/// 2. Environment variables prefixed with `ASHY`, nested with `__`:
///    `ASHY__SERVER__PORT=8080` sets `server.port`.
///
/// # Errors
/// Fails when the file is missing or unreadable, or when the merged values do not
/// deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use ashy_kernel::config::load_config;
/// use ashy_kernel::domain::config::ApiConfig;
///
/// let cfg: ApiConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(CONFIG_FILE), |p| p.as_ref().to_path_buf());
    debug!(path = %path.display(), "Loading configuration");

    Config::builder()
        .add_source(File::from(path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context(format!("reading {}", path.display()))?
        .try_deserialize::<T>()
        .context("deserializing configuration")
}
