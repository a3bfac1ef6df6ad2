//! Kernel utilities shared by the feature slices and the server app.
//!
//! * [`config::load_config`]: layered file + environment configuration.
//! * `server` (feature `server`): the router state, the JSON error envelope and the
//!   system routes.
//!
//! Slices usually only need the prelude:
//! ```rust,ignore
//! use ashy_kernel::prelude::*;
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use ashy_domain as domain;
