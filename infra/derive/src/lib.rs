#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace.
//!
//! * [`macro@ashy_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@api_model`] and [`macro@api_handler`] keep DTOs and Axum handlers consistent
//!   with the `OpenAPI` documentation.
//! * [`macro@ashy_slice`] wires a feature state into the kernel slice registry.
//! * [`macro@main`] bootstraps the tuned Tokio runtime (re-exported by `ashy-runtime`).
//!
//! Examples are `ignore`d here because the expansions reference crates that only the
//! consumers depend on.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a sync `main` running on a pre-configured runtime.
///
/// # Arguments
///
/// * `high_performance` - server profile (bigger stacks, long keep-alive).
/// * `default` or nothing - auto-detected worker threads with default stacks.
///
/// # Examples
///
/// ```rust,ignore
/// #[ashy_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares an API data transfer object.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when missing, derives `utoipa::ToSchema`
/// when the consuming crate enables its `server` feature, and applies the serde policy:
/// `rename_all = "camelCase"` and `deny_unknown_fields` unless overridden.
///
/// ```rust,ignore
/// #[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct FeedbackResult {
///     pub message: String,
///     pub session_count: u32,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an Axum handler with `utoipa::path` (under the consumer's `server` feature).
///
/// Accepts the regular `utoipa::path` arguments.
///
/// ```rust,ignore
/// #[api_handler(
///     post,
///     path = "/analyze",
///     request_body = DrawingPayload,
///     responses((status = OK, body = AnalyzeResponse)),
///     tag = FEEDBACK_TAG,
/// )]
/// pub async fn analyze_handler(/* extractors */) -> ApiResult<Json<AnalyzeResponse>> {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a domain error enum.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` (unless already derived).
/// * A `<Name>Ext` trait with `.context(...)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for variants made of exactly a source and a context field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A module-level `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants use named fields. A variant with a source (a field named `source` or marked
/// `#[source]`/`#[from]`) must also carry `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// #[ashy_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn ashy_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The struct body becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`, derefs to it and
/// implements `FeatureSlice` so it can be registered in the API state.
///
/// ```rust,ignore
/// #[ashy_derive::ashy_slice]
/// pub struct Feedback {
///     pub classifier: Classifier,
/// }
///
/// let slice = Feedback::new(FeedbackInner { classifier });
/// ```
#[proc_macro_attribute]
pub fn ashy_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
