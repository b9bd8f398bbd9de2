//! The `#[page]` attribute.
//!
//! Expands an async page function into itself plus an `inventory`
//! submission: a `TypeId` probe for the module type and a type-erased
//! loader that boxes the function's output.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{ItemFn, LitStr, ReturnType, parse_macro_input};

pub(crate) fn page_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let path = parse_macro_input!(attr as LitStr);
    let input = parse_macro_input!(item as ItemFn);

    if let Err(err) = validate(&path, &input) {
        return err.to_compile_error().into();
    }

    let module_type = match &input.sig.output {
        ReturnType::Type(_, ty) => ty,
        ReturnType::Default => {
            return syn::Error::new_spanned(
                &input.sig,
                "page function must return its page module type",
            )
            .to_compile_error()
            .into();
        }
    };

    let fn_name = &input.sig.ident;
    let type_fn = format_ident!("__viterouter_page_type_{}", fn_name);
    let load_fn = format_ident!("__viterouter_page_load_{}", fn_name);

    let expanded = quote! {
        #input

        #[doc(hidden)]
        #[allow(non_snake_case)]
        fn #type_fn() -> ::std::any::TypeId {
            ::std::any::TypeId::of::<#module_type>()
        }

        #[doc(hidden)]
        #[allow(non_snake_case)]
        fn #load_fn() -> ::viterouter::LoadFuture<::viterouter::ErasedModule> {
            ::std::boxed::Box::pin(async {
                let module = #fn_name().await;
                ::core::result::Result::Ok::<_, ::viterouter::LoadError>(
                    ::std::boxed::Box::new(module) as ::viterouter::ErasedModule
                )
            })
        }

        ::viterouter::inventory::submit! {
            ::viterouter::PageRegistration::new(#path, #type_fn, #load_fn)
        }
    };

    TokenStream::from(expanded)
}

fn validate(path: &LitStr, input: &ItemFn) -> syn::Result<()> {
    if path.value().is_empty() {
        return Err(syn::Error::new_spanned(path, "page path must not be empty"));
    }
    if input.sig.asyncness.is_none() {
        return Err(syn::Error::new_spanned(
            input.sig.fn_token,
            "page function must be async",
        ));
    }
    if !input.sig.inputs.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.sig.inputs,
            "page function must not take arguments",
        ));
    }
    if !input.sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.sig.generics,
            "page function must not be generic",
        ));
    }
    Ok(())
}
