//! Everyday imports for element authors.

pub use elemental_domain::config::{ElementalConfig, LoggingConfig, TimingConfig};
pub use elemental_domain::convert::{
    attr2bool, bool2attr, identity, identity_value, is_different, is_different_value, noop,
};
pub use elemental_domain::{
    ElementConstructor, PropertyDeclaration, PropertyFlags, RegistrationOptions, SameValue,
    ToValue, Value,
};
