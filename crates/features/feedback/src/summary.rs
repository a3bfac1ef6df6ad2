use crate::error::FeedbackError;
use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumIter};

/// A drawing with at least this many distinct colors is colorful, whatever its strokes.
pub const COLORFUL_MIN_COLORS: usize = 4;
/// More strokes than this reads as a detailed drawing.
pub const DETAILED_MAX_STROKES: usize = 50;
/// Fewer strokes than this reads as a simple drawing.
pub const SIMPLE_MIN_STROKES: usize = 15;

/// Which message pool answers a drawing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackCategory {
    Colorful,
    Detailed,
    Simple,
    General,
}

/// The only facts the classifier looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawingSummary {
    stroke_count: usize,
    distinct_color_count: usize,
}

impl Default for DrawingSummary {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl DrawingSummary {
    /// A drawing always has at least one color: a zero count is raised to one.
    #[must_use]
    pub const fn new(stroke_count: usize, distinct_color_count: usize) -> Self {
        let distinct_color_count = if distinct_color_count == 0 { 1 } else { distinct_color_count };
        Self { stroke_count, distinct_color_count }
    }

    /// Reads the summary out of an analyze request body.
    ///
    /// * `strokes`: an array counts its entries. Anything else counts as no strokes.
    /// * `colors`: an array counts its distinct scalars, compared by their JSON form so
    ///   `"1"` and `1` differ. Anything else, or an empty array, counts as one color.
    ///
    /// A present field of the wrong type takes its default and is logged at `warn`.
    ///
    /// # Errors
    /// [`FeedbackError::MalformedDrawing`] when the body is not an object, or when a color
    /// is an array or object.
    pub fn from_payload(payload: &Value) -> Result<Self, FeedbackError> {
        let Value::Object(fields) = payload else {
            return Err(malformed(format!("expected a JSON object, got {}", kind(payload))));
        };

        let stroke_count = match fields.get("strokes") {
            None | Some(Value::Null) => 0,
            Some(Value::Array(strokes)) => strokes.len(),
            Some(other) => {
                tracing::warn!(got = kind(other), "`strokes` is not an array, counting none");
                0
            },
        };

        let distinct_color_count = match fields.get("colors") {
            None | Some(Value::Null) => 1,
            Some(Value::Array(colors)) => distinct_colors(colors)?,
            Some(other) => {
                tracing::warn!(got = kind(other), "`colors` is not an array, counting one");
                1
            },
        };

        Ok(Self::new(stroke_count, distinct_color_count))
    }

    #[must_use]
    pub const fn stroke_count(&self) -> usize {
        self.stroke_count
    }

    #[must_use]
    pub const fn distinct_color_count(&self) -> usize {
        self.distinct_color_count
    }

    /// Ordered rules, first match wins: colors are checked before strokes, so a drawing
    /// that is both colorful and busy is `Colorful`.
    #[must_use]
    pub const fn category(&self) -> FeedbackCategory {
        if self.distinct_color_count >= COLORFUL_MIN_COLORS {
            FeedbackCategory::Colorful
        } else if self.stroke_count > DETAILED_MAX_STROKES {
            FeedbackCategory::Detailed
        } else if self.stroke_count < SIMPLE_MIN_STROKES {
            FeedbackCategory::Simple
        } else {
            FeedbackCategory::General
        }
    }
}

fn distinct_colors(colors: &[Value]) -> Result<usize, FeedbackError> {
    let mut seen = FxHashSet::default();
    for color in colors {
        if color.is_array() || color.is_object() {
            return Err(malformed(format!("color entries must be scalars, got {}", kind(color))));
        }
        seen.insert(color.to_string());
    }
    Ok(seen.len())
}

fn malformed(message: String) -> FeedbackError {
    FeedbackError::MalformedDrawing { message: message.into(), context: None }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
