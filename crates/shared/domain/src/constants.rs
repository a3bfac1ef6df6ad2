//! Names shared between crates (`OpenAPI` tags, config conventions).

pub const SYSTEM_TAG: &str = "System";
pub const FEEDBACK_TAG: &str = "Feedback";
pub const GALLERY_TAG: &str = "Gallery";

/// Prefix of environment overrides, e.g. `ASHY__SERVER__PORT`.
pub const ENV_PREFIX: &str = "ASHY";
/// Base name of the configuration file looked up by the server binary.
pub const CONFIG_FILE: &str = "server";
