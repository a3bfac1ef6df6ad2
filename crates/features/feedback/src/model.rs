use ashy_derive::api_model;
use serde_json::Value;

/// Every response is the first drawing of a fresh session.
pub const SESSION_COUNT: u32 = 1;

/// Encouraging feedback for one drawing
#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct FeedbackResult {
    /// Sampled from the pool of the drawing's category
    pub message: String,
    pub encouragement: String,
    /// Art-therapy tip
    pub tip: String,
    /// Always `1`
    pub session_count: u32,
}

impl FeedbackResult {
    #[must_use]
    pub const fn new(message: String, encouragement: String, tip: String) -> Self {
        Self { message, encouragement, tip, session_count: SESSION_COUNT }
    }
}

/// Drawing submitted by the canvas page. Only `strokes` and `colors` are read.
#[api_model(deny_unknown_fields = false)]
#[serde(default)]
#[derive(Default)]
pub struct DrawingPayload {
    /// One record per pointer sample. Contents are not inspected.
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub strokes: Vec<Value>,
    /// Colors used, in any order, duplicates allowed
    pub colors: Vec<String>,
    /// ISO-8601 time the drawing was sent
    pub timestamp: Option<String>,
}

/// Successful `/analyze` response
#[api_model]
pub struct AnalyzeResponse {
    /// Always `true`
    pub success: bool,
    pub feedback: FeedbackResult,
}

impl From<FeedbackResult> for AnalyzeResponse {
    fn from(feedback: FeedbackResult) -> Self {
        Self { success: true, feedback }
    }
}
