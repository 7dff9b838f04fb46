//! # Element Registry
//!
//! Registration of custom element types under tag names.
//!
//! [`define_element`] (or `#[custom_element]`) only records the tag and options; the type
//! is registered when its [`DecoratedClass`] is finalized against an [`ElementRegistry`].
//! Finalization runs at most once per decorated class.
//!
//! ```rust
//! use elemental_registry::{CustomElement, ElementRegistry, MemoryRegistry, custom_element};
//!
//! #[custom_element("x-greeting")]
//! #[derive(Default)]
//! struct Greeting;
//!
//! # fn main() -> Result<(), elemental_registry::RegistryError> {
//! let registry = MemoryRegistry::new();
//! Greeting::define(&registry)?;
//! assert!(registry.is_defined("x-greeting"));
//! # Ok(())
//! # }
//! ```

extern crate self as elemental_registry;

mod decorator;
mod error;
pub mod name;
mod registry;

pub use decorator::{CustomElement, DecoratedClass, ElementDecorator, define_element};
pub use elemental_derive::custom_element;
pub use elemental_domain::{ElementConstructor, RegistrationOptions};
pub use error::{RegistryError, RegistryErrorExt};
pub use registry::{Definition, ElementRegistry, MemoryRegistry};
