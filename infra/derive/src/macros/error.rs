use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Path, Token, Type, Variant};

/// Variant facts the generated impls depend on.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    cfgs: Vec<&'a Attribute>,
    source: Option<&'a Field>,
    has_context: bool,
    has_message: bool,
    field_count: usize,
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "ashy_error requires named fields (tuple and unit variants are not supported)",
            ));
        };

        let named = |name: &str| {
            fields.named.iter().find(|field| field.ident.as_ref().is_some_and(|i| i == name))
        };

        let context = named("context");
        if let Some(field) = context
            && !is_context_type(&field.ty)
        {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "context field must be Option<Cow<'static, str>>",
            ));
        }

        let source = fields.named.iter().find(|field| {
            field.ident.as_ref().is_some_and(|i| i == "source")
                || field
                    .attrs
                    .iter()
                    .any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
        });
        if source.is_some() && context.is_none() {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "ashy_error requires `context: Option<Cow<'static, str>>` next to a source",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            cfgs: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
            source,
            has_context: context.is_some(),
            has_message: named("message").is_some(),
            field_count: fields.named.len(),
        })
    }

    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }
}

/// Expands `#[ashy_error]`.
pub fn expand_derive(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ashy_error can only be applied to enums",
        ));
    };
    let variants =
        data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>()?;

    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let derive_attr = derive_attr(&input.attrs);
    let context_trait = context_trait(name, &ext, &variants);
    let source_impls = variants
        .iter()
        .filter(|v| !v.is_internal())
        .filter_map(|v| source_impls(name, &ext, v));
    let internal_impls = variants
        .iter()
        .find(|v| v.is_internal() && v.has_message && v.has_context)
        .map(|v| internal_impls(name, v));

    Ok(quote! {
        #[allow(non_shorthand_field_patterns)]
        #derive_attr
        #input

        #context_trait
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(
            context: &::std::option::Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    })
}

fn derive_attr(attrs: &[Attribute]) -> TokenStream {
    let derived: FxHashSet<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated).ok()
        })
        .flatten()
        .filter_map(|path| path.segments.last().map(|segment| segment.ident.to_string()))
        .collect();

    let mut missing = Vec::new();
    if !derived.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !derived.contains("Error") {
        missing.push(quote! { ::thiserror::Error });
    }

    if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } }
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        let cfgs = &v.cfgs;
        quote! { #(#cfgs)* #name::#ident { context: slot, .. } => *slot = Some(context), }
    });

    quote! {
        /// Attaches a human readable context to a failed result.
        pub trait #ext<T> {
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut error| {
                    let context = context.into();
                    match &mut error {
                        #(#arms)*
                        #[allow(unreachable_patterns)]
                        _ => {},
                    }
                    error
                })
            }
        }
    }
}

fn source_impls(name: &Ident, ext: &Ident, v: &ErrorVariant<'_>) -> Option<TokenStream> {
    let field = v.source?;
    let field_ident = field.ident.as_ref()?;
    let ty = &field.ty;
    let ident = v.ident;
    let cfgs = &v.cfgs;

    // `From` is only unambiguous when the variant holds nothing but the source and context.
    let from_impl = (v.field_count == 2).then(|| {
        quote! {
            #(#cfgs)*
            #[automatically_derived]
            impl From<#ty> for #name {
                #[inline]
                fn from(source: #ty) -> Self {
                    Self::#ident { #field_ident: source, context: None }
                }
            }
        }
    });

    let ext_impl = (v.field_count == 2).then(|| {
        quote! {
            #(#cfgs)*
            #[automatically_derived]
            impl<T> #ext<T> for ::std::result::Result<T, #ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::std::result::Result<T, #name> {
                    self.map_err(|source| #name::#ident {
                        #field_ident: source,
                        context: Some(context.into()),
                    })
                }
            }
        }
    });

    Some(quote! { #from_impl #ext_impl })
}

fn internal_impls(name: &Ident, v: &ErrorVariant<'_>) -> TokenStream {
    let cfgs = &v.cfgs;

    quote! {
        #(#cfgs)*
        #[automatically_derived]
        impl From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
            }
        }

        #(#cfgs)*
        #[automatically_derived]
        impl From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
            }
        }
    }
}

/// Accepts `Option<Cow<'static, str>>` with any path prefix on `Cow`.
fn is_context_type(ty: &Type) -> bool {
    let rendered: String = ty.to_token_stream().to_string().split_whitespace().collect();
    let Some(inner) = rendered.strip_prefix("Option<").and_then(|rest| rest.strip_suffix('>'))
    else {
        return false;
    };
    inner == "Cow<'static,str>" || inner.ends_with("::Cow<'static,str>")
}
