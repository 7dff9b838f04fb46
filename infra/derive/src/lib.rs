#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for custom elements and their reactive properties.
//! The macros replace class decorators with generated impls: registration metadata
//! for [`custom_element`], accessor pairs plus a property table for [`Properties`],
//! and the workspace-wide error wiring for [`elemental_error`].
//!
//! ## Usage
//! The generated code refers to `::elemental_properties` and `::elemental_registry`.
//! Consumers going through the facade crate can point the macros elsewhere with
//! `crate = "..."`:
//! ```rust,ignore
//! #[derive(Properties)]
//! #[properties(crate = "elemental::properties")]
//! struct Counter { /* ... */ }
//! ```
//!
//! Examples below are `ignore`d to avoid compiling in this crate; the feature crates
//! carry compiled versions in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Derives reactive accessors and the class property table for a struct.
///
/// Every field marked with `#[property(...)]` is registered in the type's
/// `PropertyTable` exactly once, the first time `Properties::class_properties()` is read.
/// Unless the field is marked `accessor`, a getter and a `set_<field>` setter are generated:
/// the setter swaps the stored value and then calls `ReactiveElement::request_update`
/// with the property name, the old and the new value. The hook fires on every set,
/// even when the value did not change.
///
/// # Arguments
///
/// * `observe = bool` - Whether the base element should react to changes (default `true`).
/// * `reflect` / `reflect = bool` - Mirror the value to an attribute (default `false`).
/// * `prop2attr = path`, `attr2prop = path` - Conversion functions (`fn(&Value) -> Value`).
/// * `modified = path` - Change predicate (`fn(&Value, &Value) -> bool`).
/// * `accessor` - The type provides its own accessors; only metadata is registered.
/// * `name = "..."` - Overrides the property name (defaults to the field name).
///
/// # Errors
/// Emits a compile-time error for enums, tuple structs, generic types or unknown arguments.
///
/// # Example
///
/// ```rust,ignore
/// use elemental_properties::{Properties, ReactiveElement, Value};
///
/// #[derive(Default, Properties)]
/// struct Counter {
///     #[property(reflect)]
///     count: u32,
///     #[property(observe = false)]
///     label: String,
/// }
///
/// impl ReactiveElement for Counter {
///     fn request_update(&mut self, name: &'static str, old: Value, new: Value) {
///         // schedule a render
///     }
/// }
/// ```
#[proc_macro_derive(Properties, attributes(property, properties))]
pub fn derive_properties(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::properties::expand_derive(input).into()
}

/// Attribute macro to declare a struct as a custom element.
///
/// Implements `CustomElement` with the given tag and optional `extends` clause.
/// Nothing is registered at expansion time: registration happens when
/// `CustomElement::define` (or `decorate().finalize(..)`) runs against a registry,
/// once the type is complete.
///
/// # Errors
/// Emits a compile-time error when the tag is empty, arguments are unknown,
/// or the struct is generic. Tag naming rules are checked by the registry.
///
/// # Example
///
/// ```rust,ignore
/// use elemental_registry::{CustomElement, MemoryRegistry, custom_element};
///
/// #[custom_element("fancy-button", extends = "button")]
/// #[derive(Default)]
/// struct FancyButton;
///
/// let registry = MemoryRegistry::new();
/// FancyButton::define(&registry)?;
/// ```
#[proc_macro_attribute]
pub fn custom_element(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::element::expand_custom_element(args.into(), input).into()
}

/// Attribute macro for the workspace's error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to results of every wrapped source error.
/// * **Standard Conversions**: `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
///
/// # Requirements
///
/// 1. Applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use elemental_derive::elemental_error;
/// use std::borrow::Cow;
///
/// #[elemental_error]
/// pub enum RegistryError {
///     #[error("Invalid name{}: {message}", format_context(.context))]
///     InvalidName { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn elemental_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
