//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`):
//! the host [`Value`](value::Value) model, property declarations, registration options
//! and configuration structs, plus the tiny conversion helpers they default to.
//! Keep it lean: no I/O, no scheduling, no registries.

pub mod config;
pub mod constants;
pub mod convert;
pub mod declaration;
pub mod element;
pub mod value;

pub use declaration::{PropertyDeclaration, PropertyDeclarationBuilder, PropertyFlags};
pub use element::{ElementConstructor, RegistrationOptions};
pub use value::{SameValue, ToValue, Value};
