//! Facade crate for the elemental workspace.
//! Re-exports the domain/kernel primitives and the feature crates under one roof.
//! Keep this crate thin: it composes the other crates and owns no behavior of its own.
//!
//! ## Usage
//! - Add `elemental` with the desired feature flags (`tokio`, `logger`, `json`).
//! - The macros default to the individual crates; from here point them at the facade paths:
//!
//! ```rust
//! use elemental::prelude::*;
//!
//! #[custom_element("x-badge", crate = "elemental::registry")]
//! #[derive(Default, Properties)]
//! #[properties(crate = "elemental::properties")]
//! struct Badge {
//!     #[property(reflect)]
//!     count: f64,
//! }
//!
//! impl ReactiveElement for Badge {
//!     fn request_update(&mut self, _name: &'static str, _old: Value, _new: Value) {}
//! }
//!
//! let registry = MemoryRegistry::new();
//! Badge::define(&registry).unwrap();
//! assert!(registry.is_defined("x-badge"));
//! assert!(Badge::class_properties().get("count").is_some_and(PropertyDeclaration::reflect));
//! ```

pub use elemental_domain as domain;
pub use elemental_kernel as kernel;
pub use elemental_kernel::convert;
#[cfg(feature = "logger")]
pub use elemental_logger as logger;
pub use elemental_properties as properties;
pub use elemental_registry as registry;
pub use elemental_timing as timing;

pub mod prelude {
    pub use elemental_kernel::prelude::*;
    pub use elemental_properties::{Properties, PropertyTable, ReactiveElement, property};
    pub use elemental_registry::{
        CustomElement, ElementRegistry, MemoryRegistry, RegistryError, custom_element,
        define_element,
    };
    pub use elemental_timing::{
        Debounce, FrameThrottle, Scheduler, Throttle, VirtualScheduler, debounce, raf_throttle,
        throttle,
    };
    #[cfg(feature = "tokio")]
    pub use elemental_timing::TokioScheduler;
}

/// Installs logging as described by the `logging` section of `config`.
///
/// # Errors
/// Returns an error if the logger rejects the settings or a subscriber is already installed.
#[cfg(feature = "logger")]
pub fn init_logging(
    name: &str,
    config: &domain::config::ElementalConfig,
) -> Result<logger::Logger, logger::LoggerError> {
    logger::Logger::from_config(name, &config.logging)
}

/// Scheduler for the current `LocalSet`, with frames paced by the `timing` section.
#[cfg(feature = "tokio")]
#[must_use]
pub fn scheduler(config: &domain::config::ElementalConfig) -> timing::TokioScheduler {
    timing::TokioScheduler::from_config(&config.timing)
}
