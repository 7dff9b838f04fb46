//! Host value model.
//!
//! Element properties are plain typed fields, but the base element, the attribute
//! converters and the change predicates all speak a single dynamic representation.
//! [`Value`] is that representation and [`ToValue`] bridges typed fields into it.

use std::borrow::Cow;
use std::fmt;

/// A dynamically typed host value.
///
/// [`Value::Null`] doubles as the "absent attribute" marker.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Cow<'static, str>),
    Array(Vec<Value>),
}

impl Value {
    /// Builds a string value without copying static text.
    pub fn string(text: impl Into<Cow<'static, str>>) -> Self {
        Self::String(text.into())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// `true` for `Null` and `Undefined`.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_nan() => f.write_str("NaN"),
            Self::Number(n) if n.is_infinite() => {
                f.write_str(if n.is_sign_positive() { "Infinity" } else { "-Infinity" })
            },
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            },
        }
    }
}

/// `Object.is`-style identity comparison.
///
/// Differs from [`PartialEq`] only for floats: `NaN` is the same value as `NaN`,
/// and `+0.0` is not the same value as `-0.0`.
pub trait SameValue {
    fn same_value(&self, other: &Self) -> bool;
}

impl SameValue for f64 {
    fn same_value(&self, other: &Self) -> bool {
        if self.is_nan() && other.is_nan() {
            return true;
        }
        self.to_bits() == other.to_bits()
    }
}

impl SameValue for f32 {
    fn same_value(&self, other: &Self) -> bool {
        if self.is_nan() && other.is_nan() {
            return true;
        }
        self.to_bits() == other.to_bits()
    }
}

macro_rules! same_value_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SameValue for $ty {
                #[inline]
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

same_value_by_eq!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String,
);

impl<T: SameValue> SameValue for Option<T> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_value(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: SameValue> SameValue for [T] {
    fn same_value(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.same_value(b))
    }
}

impl<T: SameValue> SameValue for Vec<T> {
    fn same_value(&self, other: &Self) -> bool {
        self.as_slice().same_value(other.as_slice())
    }
}

impl<T: SameValue + ?Sized> SameValue for &T {
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(*other)
    }
}

impl SameValue for Value {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.same_value(b),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a.same_value(b),
            _ => false,
        }
    }
}

/// Conversion of a typed property into the host [`Value`] model.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Undefined
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
mod numbers {
    use super::{ToValue, Value};

    macro_rules! number_to_value {
        ($($ty:ty),* $(,)?) => {
            $(
                impl ToValue for $ty {
                    #[inline]
                    fn to_value(&self) -> Value {
                        Value::Number(*self as f64)
                    }
                }
            )*
        };
    }

    number_to_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::String(Cow::Owned(self.to_string()))
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(Cow::Owned(self.to_owned()))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(Cow::Owned(self.clone()))
    }
}

impl ToValue for Cow<'static, str> {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.to_value()
    }
}

macro_rules! value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    value.to_value()
                }
            }
        )*
    };
}

value_from!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, char, String, &str, ());
