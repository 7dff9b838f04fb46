use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::fmt;

/// Options handed to the registry unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationOptions {
    /// Local name of the built-in element being customized.
    pub extends: Option<String>,
}

impl RegistrationOptions {
    /// Options for a customized built-in element.
    #[must_use]
    pub fn extending(base: impl Into<String>) -> Self {
        Self { extends: Some(base.into()) }
    }
}

/// Type-erased handle to an element type, the registry's notion of a constructor.
#[derive(Clone, Copy)]
pub struct ElementConstructor {
    type_id: TypeId,
    type_name: &'static str,
    factory: fn() -> Box<dyn Any>,
}

impl ElementConstructor {
    /// Handle for `C`; the factory builds `C::default()`.
    #[must_use]
    pub fn of<C: Default + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            type_name: std::any::type_name::<C>(),
            factory: || Box::new(C::default()),
        }
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Builds a fresh instance of the element type.
    #[must_use]
    pub fn construct(&self) -> Box<dyn Any> {
        (self.factory)()
    }

    #[must_use]
    pub fn is<C: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<C>()
    }
}

impl PartialEq for ElementConstructor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ElementConstructor {}

impl fmt::Debug for ElementConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementConstructor").field("type_name", &self.type_name).finish()
    }
}
