use crate::convert::{identity_value, is_different_value};
use crate::value::Value;
use bitflags::bitflags;
use std::fmt;

/// Converts between the property and the attribute representation.
pub type Converter = fn(&Value) -> Value;

/// Decides whether a change from `old` to `new` is significant.
pub type ModifiedFn = fn(&Value, &Value) -> bool;

bitflags! {
    /// Lifecycle switches of a property.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        /// Changes trigger a notification.
        const OBSERVE = 1 << 0;
        /// The value is mirrored to an attribute.
        const REFLECT = 1 << 1;
    }
}

impl Default for PropertyFlags {
    fn default() -> Self {
        Self::OBSERVE
    }
}

/// Per-property configuration consulted by the base element.
///
/// Immutable once built. Unset builder fields fall back to: observed, not reflected,
/// identity converters and [`is_different_value`] as the change predicate.
#[derive(Clone, Copy)]
pub struct PropertyDeclaration {
    flags: PropertyFlags,
    prop2attr: Converter,
    attr2prop: Converter,
    modified: ModifiedFn,
}

impl Default for PropertyDeclaration {
    fn default() -> Self {
        Self {
            flags: PropertyFlags::default(),
            prop2attr: identity_value,
            attr2prop: identity_value,
            modified: is_different_value,
        }
    }
}

impl fmt::Debug for PropertyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDeclaration")
            .field("observe", &self.observe())
            .field("reflect", &self.reflect())
            .finish_non_exhaustive()
    }
}

impl PropertyDeclaration {
    #[must_use]
    pub fn builder() -> PropertyDeclarationBuilder {
        PropertyDeclarationBuilder::default()
    }

    #[must_use]
    pub const fn flags(&self) -> PropertyFlags {
        self.flags
    }

    #[must_use]
    pub const fn observe(&self) -> bool {
        self.flags.contains(PropertyFlags::OBSERVE)
    }

    #[must_use]
    pub const fn reflect(&self) -> bool {
        self.flags.contains(PropertyFlags::REFLECT)
    }

    #[must_use]
    pub const fn prop2attr(&self) -> Converter {
        self.prop2attr
    }

    #[must_use]
    pub const fn attr2prop(&self) -> Converter {
        self.attr2prop
    }

    #[must_use]
    pub const fn modified(&self) -> ModifiedFn {
        self.modified
    }

    /// Applies the `modified` predicate.
    #[must_use]
    pub fn is_modified(&self, old: &Value, new: &Value) -> bool {
        (self.modified)(old, new)
    }

    /// Converts a property value to its attribute form.
    #[must_use]
    pub fn to_attribute(&self, value: &Value) -> Value {
        (self.prop2attr)(value)
    }

    /// Converts an attribute value to its property form.
    #[must_use]
    pub fn from_attribute(&self, value: &Value) -> Value {
        (self.attr2prop)(value)
    }
}

/// Builder for [`PropertyDeclaration`]; every setter is optional.
#[derive(Debug, Default, Clone, Copy)]
pub struct PropertyDeclarationBuilder {
    declaration: PropertyDeclaration,
}

impl PropertyDeclarationBuilder {
    #[must_use = "The builder must be finished with `build()`"]
    pub fn observe(mut self, observe: bool) -> Self {
        self.declaration.flags.set(PropertyFlags::OBSERVE, observe);
        self
    }

    #[must_use = "The builder must be finished with `build()`"]
    pub fn reflect(mut self, reflect: bool) -> Self {
        self.declaration.flags.set(PropertyFlags::REFLECT, reflect);
        self
    }

    #[must_use = "The builder must be finished with `build()`"]
    pub const fn prop2attr(mut self, convert: Converter) -> Self {
        self.declaration.prop2attr = convert;
        self
    }

    #[must_use = "The builder must be finished with `build()`"]
    pub const fn attr2prop(mut self, convert: Converter) -> Self {
        self.declaration.attr2prop = convert;
        self
    }

    #[must_use = "The builder must be finished with `build()`"]
    pub const fn modified(mut self, modified: ModifiedFn) -> Self {
        self.declaration.modified = modified;
        self
    }

    #[must_use]
    pub const fn build(self) -> PropertyDeclaration {
        self.declaration
    }
}
