use std::borrow::Cow;

/// Failures reported by an element registry.
///
/// Definitions are never retried; these errors propagate to whoever finalized the element.
#[elemental_derive::elemental_error]
pub enum RegistryError {
    /// The tag is not a valid custom element name.
    #[error("Invalid custom element name{}: {message}", format_context(.context))]
    InvalidName { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Another element type already uses this tag.
    #[error("Element already defined{}: {message}", format_context(.context))]
    AlreadyDefined { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// This element type is already registered under another tag.
    #[error("Constructor already in use{}: {message}", format_context(.context))]
    ConstructorInUse { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The `extends` option names a custom element instead of a built-in one.
    #[error("Invalid extends option{}: {message}", format_context(.context))]
    InvalidExtends { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal registry faults.
    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
