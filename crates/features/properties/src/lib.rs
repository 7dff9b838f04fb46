//! # Reactive Properties
//!
//! Binds struct fields to the base element's update cycle.
//!
//! `#[derive(Properties)]` turns every `#[property(...)]` field into a getter plus a
//! `set_*` setter that reports each write to [`ReactiveElement::request_update`], and
//! collects the declarations into the type's [`PropertyTable`]. The table is finished
//! once, the first time [`Properties::class_properties`] is read.
//!
//! ```rust
//! use elemental_properties::{Properties, ReactiveElement, Value};
//! use elemental_properties::convert::{attr2bool, bool2attr};
//!
//! fn to_attr(value: &Value) -> Value {
//!     bool2attr(value.as_bool().unwrap_or(false))
//! }
//!
//! fn from_attr(value: &Value) -> Value {
//!     Value::Bool(attr2bool(value))
//! }
//!
//! #[derive(Default, Properties)]
//! struct Toggle {
//!     #[property(reflect, prop2attr = to_attr, attr2prop = from_attr)]
//!     checked: bool,
//!     updates: usize,
//! }
//!
//! impl ReactiveElement for Toggle {
//!     fn request_update(&mut self, _name: &'static str, _old: Value, _new: Value) {
//!         self.updates += 1;
//!     }
//! }
//!
//! let mut toggle = Toggle::default();
//! toggle.set_checked(true);
//! assert!(*toggle.checked());
//! assert_eq!(toggle.updates, 1);
//!
//! let checked = Toggle::class_properties().get("checked").unwrap();
//! assert_eq!(checked.to_attribute(&Value::Bool(true)), Value::string(""));
//! ```

extern crate self as elemental_properties;

mod decorator;
mod element;
mod table;

pub use decorator::{BoundProperty, PropertyDecorator, PropertyKind, property};
pub use elemental_derive::Properties;
pub use elemental_domain::convert;
pub use elemental_domain::{PropertyDeclaration, PropertyFlags, SameValue, ToValue, Value};
pub use element::{Properties, ReactiveElement};
pub use table::{PropertyTable, PropertyTableBuilder};
