//! Feedback feature slice: turns a drawing into an encouraging message, an
//! encouragement and an art-therapy tip.

mod catalog;
mod classifier;
mod error;
#[cfg(feature = "server")]
mod handlers;
mod model;
mod summary;

pub use crate::catalog::{
    COLORFUL_MESSAGES, Catalog, DETAILED_MESSAGES, ENCOURAGEMENTS, FALLBACK_ENCOURAGEMENT,
    GENERAL_MESSAGES, SIMPLE_MESSAGES, THERAPEUTIC_TIPS,
};
pub use crate::classifier::Classifier;
pub use crate::error::{FeedbackError, FeedbackErrorExt};
#[cfg(feature = "server")]
pub use crate::handlers::{analyze_handler, router};
pub use crate::model::{AnalyzeResponse, DrawingPayload, FeedbackResult, SESSION_COUNT};
pub use crate::summary::{
    COLORFUL_MIN_COLORS, DETAILED_MAX_STROKES, DrawingSummary, FeedbackCategory,
    SIMPLE_MIN_STROKES,
};

use ashy_kernel::domain::config::ApiConfig;
use ashy_kernel::domain::registry::InitializedSlice;

/// Feedback feature state
#[ashy_derive::ashy_slice]
pub struct Feedback {
    pub classifier: Classifier,
}

/// Builds the catalog from `[feedback]` and wraps it into a registrable slice.
///
/// # Errors
/// [`FeedbackError::Config`] when a configured pool entry is blank.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, FeedbackError> {
    let catalog = Catalog::from_config(&config.feedback).context("building feedback catalog")?;

    tracing::info!(
        general = catalog.messages(FeedbackCategory::General).len(),
        tips = catalog.tips().len(),
        encouragements = catalog.encouragements().len(),
        "Feedback slice initialized"
    );

    Ok(InitializedSlice::new(Feedback::new(FeedbackInner { classifier: Classifier::new(catalog) })))
}
