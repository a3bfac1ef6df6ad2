use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Every configuration section of the service. All fields have defaults.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub feedback: FeedbackConfig,
    pub gallery: GalleryConfig,
}

/// Arc-wrapped config, cheap to clone into handlers and slices.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Largest accepted request body in bytes. Drawings carry one record per pointer move.
    pub body_limit: usize,
    /// Seconds granted to in-flight requests after a shutdown signal.
    pub shutdown_timeout: u64,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths. Presence switches the listener to HTTPS.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Static front-end assets (the drawing page).
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    /// Explicit directives, e.g. `ashy=debug,tower_http=info`.
    pub filter: Option<String>,
    pub console: bool,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

/// Overrides for the feedback pools. An empty list keeps the built-in pool.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub colorful: Vec<String>,
    pub detailed: Vec<String>,
    pub simple: Vec<String>,
    pub general: Vec<String>,
    pub encouragements: Vec<String>,
    pub tips: Vec<String>,
    pub fallback_encouragement: Option<String>,
}

/// Save acknowledgement. Unset keeps the built-in message.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub saved_message: Option<String>,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5001,
            body_limit: 8 * 1024 * 1024,
            shutdown_timeout: 30,
            ssl: None,
        }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            directory: None,
            json: false,
        }
    }
}
