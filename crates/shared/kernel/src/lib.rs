//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain conversion helpers and owns
//! configuration loading.
//!
//! ## Conversions
//! ```rust
//! use elemental_kernel::prelude::*;
//!
//! assert!(attr2bool(&Value::string("")));
//! assert_eq!(bool2attr(false), Value::Null);
//! assert!(!is_different(&f64::NAN, &f64::NAN));
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use elemental_kernel::config::load_config;
//! use elemental_kernel::domain::config::ElementalConfig;
//!
//! let cfg: ElementalConfig = load_config(Some("elemental.toml"))?;
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod prelude;

pub use elemental_domain as domain;
pub use elemental_domain::convert;
