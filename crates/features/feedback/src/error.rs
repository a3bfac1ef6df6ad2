use std::borrow::Cow;

/// Feedback slice error type.
#[ashy_derive::ashy_error]
pub enum FeedbackError {
    /// Parseable JSON whose shape is not a drawing. Absorbed by the general fallback.
    #[error("Malformed drawing{}: {message}", format_context(.context))]
    MalformedDrawing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Invalid `[feedback]` configuration.
    #[error("Feedback config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
