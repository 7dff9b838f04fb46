use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, ItemStruct, LitStr, Path, Token};

/// `#[custom_element("x-tag", extends = "button", crate = "...")]`
struct ElementArgs {
    tag: LitStr,
    extends: Option<LitStr>,
    krate: Option<Path>,
}

impl Parse for ElementArgs {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let tag: LitStr = input.parse()?;
        if tag.value().is_empty() {
            return Err(Error::new_spanned(&tag, "custom element tag name cannot be empty"));
        }

        let mut extends = None;
        let mut krate = None;
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            let key: syn::Ident = input.call(syn::ext::IdentExt::parse_any)?;
            input.parse::<Token![=]>()?;
            let value: LitStr = input.parse()?;
            match key.to_string().as_str() {
                "extends" if extends.is_none() => extends = Some(value),
                "crate" if krate.is_none() => krate = Some(value.parse()?),
                "extends" | "crate" => return Err(Error::new_spanned(key, "duplicate argument")),
                _ => {
                    return Err(Error::new_spanned(
                        key,
                        "unsupported argument; expected `extends = \"...\"` or `crate = \"...\"`",
                    ));
                },
            }
        }

        Ok(Self { tag, extends, krate })
    }
}

pub fn expand_custom_element(args: TokenStream, input: ItemStruct) -> TokenStream {
    let ElementArgs { tag, extends, krate } = match syn::parse2(args) {
        Ok(args) => args,
        Err(err) => return err.into_compile_error(),
    };

    if !input.generics.params.is_empty() {
        return Error::new_spanned(
            &input.generics,
            "custom elements are registered once per type and cannot be generic",
        )
        .into_compile_error();
    }

    let krate = krate.unwrap_or_else(|| syn::parse_quote!(::elemental_registry));
    let name = &input.ident;
    let options = extends.map_or_else(
        || quote! { ::core::option::Option::None },
        |base| {
            quote! {
                ::core::option::Option::Some(#krate::RegistrationOptions::extending(#base))
            }
        },
    );

    quote! {
        #input

        #[automatically_derived]
        impl #krate::CustomElement for #name {
            const TAG: &'static str = #tag;

            fn registration_options() -> ::core::option::Option<#krate::RegistrationOptions> {
                #options
            }
        }
    }
}
