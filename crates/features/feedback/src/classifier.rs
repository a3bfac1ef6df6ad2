use crate::catalog::Catalog;
use crate::model::FeedbackResult;
use crate::summary::{DrawingSummary, FeedbackCategory};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::Value;

/// Picks encouraging feedback for a drawing. Stateless apart from the read-only catalog.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    catalog: Catalog,
}

impl Classifier {
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// One message from the category pool, then an encouragement and a tip drawn
    /// independently of the category.
    pub fn classify_and_respond<R: Rng + ?Sized>(
        &self,
        summary: &DrawingSummary,
        rng: &mut R,
    ) -> FeedbackResult {
        let category = summary.category();

        FeedbackResult::new(
            pick(self.catalog.messages(category), rng),
            pick(self.catalog.encouragements(), rng),
            pick(self.catalog.tips(), rng),
        )
    }

    /// Feedback for a raw request body. Never fails: a body that is not a JSON object,
    /// or carries nested color entries, gets [`Self::fallback`].
    pub fn analyze<R: Rng + ?Sized>(&self, payload: &Value, rng: &mut R) -> FeedbackResult {
        match DrawingSummary::from_payload(payload) {
            Ok(summary) => {
                tracing::debug!(
                    strokes = summary.stroke_count(),
                    colors = summary.distinct_color_count(),
                    category = %summary.category(),
                    "Drawing classified"
                );
                self.classify_and_respond(&summary, rng)
            },
            Err(err) => {
                tracing::warn!(error = %err, "Unreadable drawing, sending general feedback");
                self.fallback(rng)
            },
        }
    }

    /// General message, the fixed fallback encouragement and a random tip.
    pub fn fallback<R: Rng + ?Sized>(&self, rng: &mut R) -> FeedbackResult {
        FeedbackResult::new(
            pick(self.catalog.messages(FeedbackCategory::General), rng),
            self.catalog.fallback_encouragement().to_owned(),
            pick(self.catalog.tips(), rng),
        )
    }
}

// Pools are never empty once the catalog is built.
fn pick<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> String {
    pool.choose(rng).cloned().unwrap_or_default()
}
