//! Small conversion helpers shared by property declarations and base elements.

use crate::value::{SameValue, Value};

/// Does nothing.
#[inline]
pub const fn noop() {}

/// Returns the value unchanged.
#[inline]
#[must_use]
pub fn identity<T>(value: T) -> T {
    value
}

/// Identity over host values; the default `prop2attr`/`attr2prop` converter.
#[must_use]
pub fn identity_value(value: &Value) -> Value {
    value.clone()
}

/// An attribute is `true` exactly when it is present, whatever its content.
#[must_use]
pub const fn attr2bool(value: &Value) -> bool {
    !value.is_null()
}

/// Canonical boolean attribute encoding: present (`""`) for `true`, absent for `false`.
#[must_use]
pub const fn bool2attr(value: bool) -> Value {
    if value { Value::String(std::borrow::Cow::Borrowed("")) } else { Value::Null }
}

/// `true` when the two values are NOT the same value, in the `Object.is` sense.
#[inline]
#[must_use]
pub fn is_different<T: SameValue + ?Sized>(old: &T, new: &T) -> bool {
    !old.same_value(new)
}

/// [`is_different`] over host values; the default `modified` predicate.
#[must_use]
pub fn is_different_value(old: &Value, new: &Value) -> bool {
    is_different(old, new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_presence_is_truthiness() {
        assert!(!attr2bool(&Value::Null));
        assert!(attr2bool(&Value::string("")));
        assert!(attr2bool(&Value::string("false")));
    }

    #[test]
    fn booleans_encode_as_presence() {
        assert_eq!(bool2attr(true), Value::string(""));
        assert_eq!(bool2attr(false), Value::Null);
        assert!(attr2bool(&bool2attr(true)));
        assert!(!attr2bool(&bool2attr(false)));
    }

    #[test]
    fn is_different_uses_same_value_semantics() {
        assert!(!is_different(&f64::NAN, &f64::NAN));
        assert!(is_different(&0.0, &-0.0));
        assert!(is_different(&1, &2));
        assert!(!is_different("a", "a"));
        assert!(!is_different_value(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
        assert!(is_different_value(&Value::Null, &Value::Undefined));
    }

    #[test]
    fn identity_and_noop() {
        noop();
        assert_eq!(identity(7), 7);
        assert_eq!(identity_value(&Value::Bool(true)), Value::Bool(true));
    }
}
