use ashy_derive::ashy_error;
use std::borrow::Cow;

#[ashy_error]
pub enum CanvasError {
    #[error("Canvas IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Canvas size {width}x{height} is invalid{}", format_context(.context))]
    InvalidSize { width: u32, height: u32, context: Option<std::borrow::Cow<'static, str>> },

    #[error("Internal canvas error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: CanvasError = "oops".into();
    let _ = err.to_string();
}
