//! Axum building blocks shared by the feature slices.

mod error;
mod health;
pub mod router;
mod state;

pub use error::{ApiError, ApiErrorExt, ApiResult, ErrorBody};
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateErrorExt, ApiStateInner};
