use crate::error::RegistryError;
use crate::name::{is_valid_name, validate_name};
use elemental_domain::{ElementConstructor, RegistrationOptions};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::sync::Arc;
use tracing::{debug, warn};

/// The host component registry.
///
/// Implementations own the process-wide tag namespace. Definitions are permanent:
/// there is no way to undefine a tag.
pub trait ElementRegistry: Send + Sync {
    /// Registers `constructor` under `name`.
    ///
    /// # Errors
    /// Implementations reject malformed names and duplicate tags or constructors.
    fn define(
        &self,
        name: &str,
        constructor: ElementConstructor,
        options: Option<&RegistrationOptions>,
    ) -> Result<(), RegistryError>;

    /// Constructor registered under `name`.
    fn get(&self, name: &str) -> Option<ElementConstructor>;

    /// Tag under which the type identified by `type_id` is registered.
    fn get_name(&self, type_id: TypeId) -> Option<String>;

    fn is_defined(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// A single registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub constructor: ElementConstructor,
    pub options: Option<RegistrationOptions>,
}

impl Definition {
    #[must_use]
    pub fn extends(&self) -> Option<&str> {
        self.options.as_ref().and_then(|o| o.extends.as_deref())
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    definitions: Vec<Definition>,
    by_name: FxHashMap<String, usize>,
    by_type: FxHashMap<TypeId, usize>,
}

/// In-process registry following the custom element definition rules.
///
/// Cloning is cheap and clones share the same namespace.
///
/// # Examples
/// ```rust
/// use elemental_domain::ElementConstructor;
/// use elemental_registry::{ElementRegistry, MemoryRegistry};
///
/// #[derive(Default)]
/// struct Badge;
///
/// # fn main() -> Result<(), elemental_registry::RegistryError> {
/// let registry = MemoryRegistry::new();
/// registry.define("x-badge", ElementConstructor::of::<Badge>(), None)?;
/// assert!(registry.is_defined("x-badge"));
/// assert!(registry.define("x-badge", ElementConstructor::of::<Badge>(), None).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    state: Arc<RwLock<RegistryState>>,
}

impl MemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full entry for `name`.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<Definition> {
        let state = self.state.read();
        state.by_name.get(name).map(|&i| state.definitions[i].clone())
    }

    /// Every definition, in registration order.
    #[must_use]
    pub fn definitions(&self) -> Vec<Definition> {
        self.state.read().definitions.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds a fresh instance of the element registered under `name`.
    #[must_use]
    pub fn construct(&self, name: &str) -> Option<Box<dyn Any>> {
        self.get(name).map(|ctor| ctor.construct())
    }

    fn check(
        state: &RegistryState,
        name: &str,
        constructor: &ElementConstructor,
        options: Option<&RegistrationOptions>,
    ) -> Result<(), RegistryError> {
        if let Err(violation) = validate_name(name) {
            return Err(RegistryError::InvalidName {
                message: format!("'{name}': {}", violation.describe()).into(),
                context: None,
            });
        }

        if state.by_name.contains_key(name) {
            return Err(RegistryError::AlreadyDefined {
                message: format!("'{name}' is already registered").into(),
                context: None,
            });
        }

        if let Some(&existing) = state.by_type.get(&constructor.type_id()) {
            return Err(RegistryError::ConstructorInUse {
                message: format!(
                    "{} is already registered as '{}'",
                    constructor.type_name(),
                    state.definitions[existing].name
                )
                .into(),
                context: None,
            });
        }

        if let Some(base) = options.and_then(|o| o.extends.as_deref())
            && is_valid_name(base)
        {
            return Err(RegistryError::InvalidExtends {
                message: format!("'{base}' is a custom element name, not a built-in element")
                    .into(),
                context: None,
            });
        }

        Ok(())
    }
}

impl ElementRegistry for MemoryRegistry {
    fn define(
        &self,
        name: &str,
        constructor: ElementConstructor,
        options: Option<&RegistrationOptions>,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();

        if let Err(err) = Self::check(&state, name, &constructor, options) {
            warn!(element = name, error = %err, "Element definition rejected");
            return Err(err);
        }

        let index = state.definitions.len();
        state.by_name.insert(name.to_owned(), index);
        state.by_type.insert(constructor.type_id(), index);
        state.definitions.push(Definition {
            name: name.to_owned(),
            constructor,
            options: options.cloned(),
        });

        debug!(
            element = name,
            constructor = constructor.type_name(),
            extends = options.and_then(|o| o.extends.as_deref()),
            "Element defined"
        );
        Ok(())
    }

    fn get(&self, name: &str) -> Option<ElementConstructor> {
        let state = self.state.read();
        state.by_name.get(name).map(|&i| state.definitions[i].constructor)
    }

    fn get_name(&self, type_id: TypeId) -> Option<String> {
        let state = self.state.read();
        state.by_type.get(&type_id).map(|&i| state.definitions[i].name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Alpha;
    #[derive(Debug, Default)]
    struct Beta;

    #[test]
    fn rejects_duplicate_names_and_constructors() {
        let registry = MemoryRegistry::new();
        registry.define("x-alpha", ElementConstructor::of::<Alpha>(), None).unwrap();

        let dup_name = registry.define("x-alpha", ElementConstructor::of::<Beta>(), None);
        assert!(matches!(dup_name, Err(RegistryError::AlreadyDefined { .. })));

        let dup_ctor = registry.define("x-alpha-two", ElementConstructor::of::<Alpha>(), None);
        assert!(matches!(dup_ctor, Err(RegistryError::ConstructorInUse { .. })));

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn failed_definitions_leave_no_trace() {
        let registry = MemoryRegistry::new();
        let err = registry.define("alpha", ElementConstructor::of::<Alpha>(), None).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidName { .. }));
        assert!(err.to_string().contains("hyphen"));
        assert!(registry.is_empty());
        assert!(registry.get_name(TypeId::of::<Alpha>()).is_none());
    }

    #[test]
    fn extends_must_name_a_builtin() {
        let registry = MemoryRegistry::new();
        let custom_base = RegistrationOptions::extending("x-base");
        let err = registry
            .define("x-alpha", ElementConstructor::of::<Alpha>(), Some(&custom_base))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidExtends { .. }));

        let builtin = RegistrationOptions::extending("button");
        registry.define("x-alpha", ElementConstructor::of::<Alpha>(), Some(&builtin)).unwrap();
        assert_eq!(registry.definition("x-alpha").unwrap().extends(), Some("button"));
    }

    #[test]
    fn clones_share_the_namespace() {
        let registry = MemoryRegistry::new();
        let view = registry.clone();
        registry.define("x-beta", ElementConstructor::of::<Beta>(), None).unwrap();
        assert!(view.is_defined("x-beta"));
        assert_eq!(view.get_name(TypeId::of::<Beta>()).as_deref(), Some("x-beta"));
        assert!(view.construct("x-beta").unwrap().is::<Beta>());
    }
}
