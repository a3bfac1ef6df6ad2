use ashy_derive::ashy_error;
use std::borrow::Cow;

#[ashy_error]
pub enum PaletteError {
    #[error("Palette IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Palette internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_swatches() -> Result<Vec<String>, PaletteError> {
    let raw = std::fs::read_to_string("/nonexistent/ashy/palette.txt")?;
    Ok(raw.lines().map(str::to_owned).collect())
}

#[test]
fn internal_from_str_formats_without_context() {
    let err: PaletteError = "palette is empty".into();
    assert_eq!(err.to_string(), "Palette internal error: palette is empty");
}

#[test]
fn internal_from_string_keeps_owned_message() {
    let err = PaletteError::from(format!("{} colors missing", 3));
    assert!(matches!(
        err,
        PaletteError::Internal { ref message, context: None } if message == "3 colors missing"
    ));
}

#[test]
fn context_is_attached_to_own_errors() {
    let res: Result<(), PaletteError> = Err("no swatches".into());
    let err = res.context("loading palette").unwrap_err();
    assert_eq!(err.to_string(), "Palette internal error (loading palette): no swatches");
}

#[test]
fn context_wraps_source_errors() {
    let res: Result<(), std::io::Error> = Err(std::io::Error::other("permission denied"));
    let err = res.context("reading swatches").unwrap_err();
    assert!(matches!(err, PaletteError::Io { .. }));
    assert_eq!(err.to_string(), "Palette IO error (reading swatches): permission denied");
}

#[test]
fn question_mark_converts_source_errors() {
    let err = read_swatches().unwrap_err();
    assert!(matches!(err, PaletteError::Io { context: None, .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn ashy_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/ashy_error_pass.rs");
    t.compile_fail("tests/ui/ashy_error_tuple_variant.rs");
    t.compile_fail("tests/ui/ashy_error_no_context.rs");
    t.compile_fail("tests/ui/ashy_error_bad_context_type.rs");
    t.compile_fail("tests/ui/ashy_error_struct.rs");
}
