use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Path, Token};

const DEFAULT_RENAME: &str = "camelCase";

/// Expands `#[api_model]`.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match api_model(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

/// Expands `#[api_handler]`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

impl ModelArgs {
    fn parse(args: TokenStream) -> syn::Result<Self> {
        let metas = Punctuated::<MetaNameValue, Token![,]>::parse_terminated.parse2(args)?;
        let mut parsed = Self::default();

        for meta in metas {
            let lit = literal(&meta)?;
            if meta.path.is_ident("rename_all") {
                let Lit::Str(value) = lit else {
                    return Err(syn::Error::new_spanned(lit, "rename_all must be a string"));
                };
                if parsed.rename_all.replace(value.clone()).is_some() {
                    return Err(syn::Error::new_spanned(&meta, "duplicate rename_all"));
                }
            } else if meta.path.is_ident("deny_unknown_fields") {
                let Lit::Bool(value) = lit else {
                    return Err(syn::Error::new_spanned(lit, "deny_unknown_fields must be a bool"));
                };
                if parsed.deny_unknown_fields.replace(value.value).is_some() {
                    return Err(syn::Error::new_spanned(&meta, "duplicate deny_unknown_fields"));
                }
            } else {
                return Err(syn::Error::new_spanned(
                    &meta.path,
                    "unsupported argument; expected rename_all or deny_unknown_fields",
                ));
            }
        }

        Ok(parsed)
    }
}

fn literal(meta: &MetaNameValue) -> syn::Result<&Lit> {
    match &meta.value {
        Expr::Lit(expr) => Ok(&expr.lit),
        other => Err(syn::Error::new_spanned(other, "expected a literal")),
    }
}

/// What the struct already declares through its own `#[serde(...)]` attributes.
#[derive(Default)]
struct SerdePolicy {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

impl SerdePolicy {
    fn scan(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut policy = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            let metas = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
            for meta in metas {
                match meta {
                    Meta::Path(path) if path.is_ident("deny_unknown_fields") => {
                        policy.deny_unknown_fields = true;
                    },
                    Meta::NameValue(nv) if nv.path.is_ident("rename_all") => {
                        if let Lit::Str(value) = literal(&nv)? {
                            policy.rename_all = Some(value.clone());
                        }
                    },
                    _ => {},
                }
            }
        }

        Ok(policy)
    }
}

fn api_model(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = ModelArgs::parse(args)?;
    let policy = SerdePolicy::scan(&input.attrs)?;
    let derived = derived_traits(&input.attrs);

    let mut derives = Vec::new();
    if !derived.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !derived.contains("Serialize") {
        derives.push(quote! { ::serde::Serialize });
    }
    if !derived.contains("Deserialize") {
        derives.push(quote! { ::serde::Deserialize });
    }
    let derive_attr =
        if derives.is_empty() { quote! {} } else { quote! { #[derive(#(#derives),*)] } };

    let schema_attr = if derived.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let wanted = args.rename_all.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, Span::call_site()));
    let rename_attr = match &policy.rename_all {
        Some(existing) if existing.value() != wanted.value() => {
            return Err(syn::Error::new_spanned(
                existing,
                "conflicting serde rename_all; drop it or pass the same value to api_model",
            ));
        },
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #wanted)] },
    };

    let deny = args.deny_unknown_fields.unwrap_or(true);
    let deny_attr = match (policy.deny_unknown_fields, deny) {
        (true, false) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "serde(deny_unknown_fields) is set on the struct; remove it before disabling",
            ));
        },
        (false, true) => quote! { #[serde(deny_unknown_fields)] },
        _ => quote! {},
    };

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

fn derived_traits(attrs: &[Attribute]) -> FxHashSet<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated).ok()
        })
        .flatten()
        .filter_map(|path| path.segments.last().map(|segment| segment.ident.to_string()))
        .collect()
}
