use std::borrow::Cow;

/// Gallery slice error type.
#[ashy_derive::ashy_error]
pub enum GalleryError {
    /// Invalid `[gallery]` configuration.
    #[error("Gallery config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
