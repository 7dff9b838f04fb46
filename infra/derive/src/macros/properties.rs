use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Error, Expr, Field, Fields, Ident, LitBool, LitStr, Path, Type};

/// Parsed `#[property(...)]` arguments of one field.
#[derive(Default)]
struct PropertyArgs {
    observe: Option<bool>,
    reflect: Option<bool>,
    prop2attr: Option<Path>,
    attr2prop: Option<Path>,
    modified: Option<Path>,
    accessor: bool,
}

struct PropertyField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    name: String,
    args: PropertyArgs,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    try_expand(&input).unwrap_or_else(Error::into_compile_error)
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Properties keeps one property table per type and cannot be derived for generic types",
        ));
    }

    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(&input.ident, "Properties can only be derived for structs"));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(Error::new_spanned(&input.ident, "Properties requires named fields"));
    };

    let krate = crate_path(input)?;
    let properties = fields
        .named
        .iter()
        .filter_map(|field| property_field(field).transpose())
        .collect::<syn::Result<Vec<_>>>()?;

    let name = &input.ident;
    let accessors = properties.iter().filter(|p| !p.args.accessor).map(|p| accessor_pair(&krate, p));
    let finishers = properties.iter().map(|p| finisher(&krate, p));

    Ok(quote! {
        #[automatically_derived]
        impl #name {
            #(#accessors)*
        }

        #[automatically_derived]
        impl #krate::Properties for #name {
            fn class_properties() -> &'static #krate::PropertyTable {
                static TABLE: ::std::sync::OnceLock<#krate::PropertyTable> = ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    let mut builder = #krate::PropertyTable::builder(::std::any::type_name::<Self>());
                    #(#finishers)*
                    builder.finalize()
                })
            }
        }
    })
}

/// Resolves `#[properties(crate = "...")]`, defaulting to `::elemental_properties`.
fn crate_path(input: &DeriveInput) -> syn::Result<Path> {
    let mut krate = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("properties")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                krate = Some(lit.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported properties argument; expected `crate = \"...\"`"))
            }
        })?;
    }
    Ok(krate.unwrap_or_else(|| syn::parse_quote!(::elemental_properties)))
}

fn property_field(field: &Field) -> syn::Result<Option<PropertyField<'_>>> {
    let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("property")) else {
        return Ok(None);
    };
    let Some(ident) = field.ident.as_ref() else {
        return Ok(None);
    };

    let mut args = PropertyArgs::default();
    let mut name = None;

    // A bare `#[property]` keeps every default.
    if !matches!(attr.meta, syn::Meta::Path(_)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("observe") {
                args.observe = Some(flag(&meta)?);
            } else if meta.path.is_ident("reflect") {
                args.reflect = Some(flag(&meta)?);
            } else if meta.path.is_ident("accessor") {
                args.accessor = flag(&meta)?;
            } else if meta.path.is_ident("prop2attr") {
                args.prop2attr = Some(function_path(&meta)?);
            } else if meta.path.is_ident("attr2prop") {
                args.attr2prop = Some(function_path(&meta)?);
            } else if meta.path.is_ident("modified") {
                args.modified = Some(function_path(&meta)?);
            } else if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                name = Some(lit.value());
            } else {
                return Err(meta.error(
                    "unsupported property argument; expected observe, reflect, prop2attr, \
                     attr2prop, modified, accessor or name",
                ));
            }
            Ok(())
        })?;
    }

    Ok(Some(PropertyField {
        ident,
        ty: &field.ty,
        name: name.unwrap_or_else(|| ident.unraw().to_string()),
        args,
    }))
}

/// Accepts both `reflect` and `reflect = true`.
fn flag(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<bool> {
    if meta.input.peek(syn::Token![=]) {
        let lit: LitBool = meta.value()?.parse()?;
        Ok(lit.value)
    } else {
        Ok(true)
    }
}

/// Accepts `modified = my_fn` as well as `modified = "my_fn"`.
fn function_path(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<Path> {
    let value = meta.value()?;
    if value.peek(LitStr) {
        let lit: LitStr = value.parse()?;
        return lit.parse();
    }
    match value.parse::<Expr>()? {
        Expr::Path(expr) => Ok(expr.path),
        other => Err(Error::new_spanned(other, "expected a function path")),
    }
}

fn accessor_pair(krate: &Path, property: &PropertyField<'_>) -> TokenStream {
    let field = property.ident;
    let ty = property.ty;
    let name = LitStr::new(&property.name, Span::call_site());
    let getter = property.ident;
    let setter = format_ident!("set_{}", property.ident.unraw());
    let getter_doc = format!("Returns the current value of the `{}` property.", property.name);
    let setter_doc = format!(
        "Stores a new `{}` value and forwards the change to `request_update`.",
        property.name
    );

    quote! {
        #[doc = #getter_doc]
        #[inline]
        #[must_use]
        pub const fn #getter(&self) -> &#ty {
            &self.#field
        }

        #[doc = #setter_doc]
        pub fn #setter(&mut self, value: #ty) {
            let previous = ::std::mem::replace(&mut self.#field, value);
            let old = #krate::ToValue::to_value(&previous);
            let new = #krate::ToValue::to_value(&self.#field);
            <Self as #krate::ReactiveElement>::request_update(self, #name, old, new);
        }
    }
}

fn finisher(krate: &Path, property: &PropertyField<'_>) -> TokenStream {
    let name = LitStr::new(&property.name, Span::call_site());
    let args = &property.args;

    let observe = args.observe.map(|v| quote! { .observe(#v) });
    let reflect = args.reflect.map(|v| quote! { .reflect(#v) });
    let prop2attr = args.prop2attr.as_ref().map(|f| quote! { .prop2attr(#f) });
    let attr2prop = args.attr2prop.as_ref().map(|f| quote! { .attr2prop(#f) });
    let modified = args.modified.as_ref().map(|f| quote! { .modified(#f) });
    let target = if args.accessor { quote! { accessor } } else { quote! { stored } };

    quote! {
        #krate::property(
            #krate::PropertyDeclaration::builder()
                #observe #reflect #prop2attr #attr2prop #modified
                .build(),
        )
        .#target(#name)
        .finish::<Self>(&mut builder);
    }
}
