use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Fields, ItemStruct};

/// Expands `#[ashy_slice]` into `<Name>Inner`, the `Arc` handle and the registry impl.
pub fn expand_slice(input: ItemStruct) -> TokenStream {
    let ItemStruct { attrs, vis, ident, fields, .. } = input;
    let inner = format_ident!("{ident}Inner");
    let slice_name = ident.to_string();

    let body = match &fields {
        Fields::Named(_) => quote! { #fields },
        Fields::Unnamed(_) | Fields::Unit => quote! { #fields; },
    };

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #inner #body

        #[doc = concat!("Shared handle to [`", stringify!(#inner), "`].")]
        #[derive(Debug, Clone)]
        #vis struct #ident {
            inner: ::std::sync::Arc<#inner>,
        }

        impl #ident {
            #[must_use]
            pub fn new(inner: #inner) -> Self {
                Self { inner: ::std::sync::Arc::new(inner) }
            }
        }

        impl ::std::ops::Deref for #ident {
            type Target = #inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::ashy_kernel::domain::registry::FeatureSlice for #ident {
            fn name(&self) -> &'static str {
                #slice_name
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    }
}
