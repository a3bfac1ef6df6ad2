//! Facade crate for the ASHY features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `ashy` with the `server` feature.
//! - Call `ashy::init` to build the feature slices and `ashy::server::router::api_router`
//!   for their routes.

pub use ashy_domain as domain;
use ashy_domain::config::ApiConfig;
pub use ashy_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        use ashy_kernel::server::ApiState;
        pub use ashy_kernel::server::router::system_router;
        use utoipa_axum::router::OpenApiRouter;

        /// Routes of every feature slice.
        pub fn api_router() -> OpenApiRouter<ApiState> {
            OpenApiRouter::new()
                .merge(crate::features::feedback::router())
                .merge(crate::features::gallery::router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use ashy_feedback as feedback;
    pub use ashy_gallery as gallery;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "feedback",
        "gallery",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize every feature slice.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let slices = vec![features::feedback::init(config)?, features::gallery::init(config)?];

    Ok(slices)
}
