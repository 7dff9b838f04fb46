use crate::error::RegistryError;
use crate::registry::ElementRegistry;
use elemental_domain::{ElementConstructor, RegistrationOptions};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

/// Starts the definition of a custom element named `name`.
///
/// Nothing is registered until the decorated class is finalized.
///
/// # Examples
/// ```rust
/// use elemental_registry::{MemoryRegistry, ElementRegistry, define_element};
///
/// #[derive(Default)]
/// struct Toggle;
///
/// # fn main() -> Result<(), elemental_registry::RegistryError> {
/// let registry = MemoryRegistry::new();
/// let toggle = define_element("x-toggle").apply::<Toggle>();
/// assert!(!registry.is_defined("x-toggle"));
///
/// toggle.finalize(&registry)?;
/// toggle.finalize(&registry)?; // no second registration
/// assert_eq!(registry.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn define_element(name: impl Into<Cow<'static, str>>) -> ElementDecorator {
    ElementDecorator { name: name.into(), options: None }
}

/// A pending `(name, options)` pair waiting for the class it decorates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDecorator {
    name: Cow<'static, str>,
    options: Option<RegistrationOptions>,
}

impl ElementDecorator {
    /// Attaches registration options; they reach the registry untouched.
    #[must_use]
    pub fn options(mut self, options: RegistrationOptions) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn maybe_options(mut self, options: Option<RegistrationOptions>) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decorates `C`. Registration is deferred to [`DecoratedClass::finalize`].
    #[must_use]
    pub fn apply<C: Default + 'static>(self) -> DecoratedClass<C> {
        DecoratedClass {
            name: self.name,
            options: self.options,
            finalized: AtomicBool::new(false),
            class: PhantomData,
        }
    }
}

/// A class carrying a registration finisher that runs at most once.
pub struct DecoratedClass<C> {
    name: Cow<'static, str>,
    options: Option<RegistrationOptions>,
    finalized: AtomicBool,
    class: PhantomData<fn() -> C>,
}

impl<C: Default + 'static> DecoratedClass<C> {
    /// Runs the registration finisher against `registry`.
    ///
    /// The finisher is consumed by the first call whatever its outcome, so later calls
    /// return `Ok(())` without touching the registry.
    ///
    /// # Errors
    /// Propagates the registry's error unchanged (invalid or duplicate name, constructor
    /// already in use).
    pub fn finalize(&self, registry: &dyn ElementRegistry) -> Result<(), RegistryError> {
        if self.finalized.swap(true, Ordering::AcqRel) {
            trace!(element = %self.name, "Element already finalized");
            return Ok(());
        }
        registry.define(&self.name, ElementConstructor::of::<C>(), self.options.as_ref())
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn registration_options(&self) -> Option<&RegistrationOptions> {
        self.options.as_ref()
    }
}

impl<C> fmt::Debug for DecoratedClass<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratedClass")
            .field("name", &self.name)
            .field("class", &std::any::type_name::<C>())
            .field("options", &self.options)
            .field("finalized", &self.finalized.load(Ordering::Relaxed))
            .finish()
    }
}

/// A type declared as a custom element, usually through `#[custom_element("x-tag")]`.
pub trait CustomElement: Default + 'static {
    /// Tag name the element registers under.
    const TAG: &'static str;

    /// Options passed through to the registry.
    fn registration_options() -> Option<RegistrationOptions> {
        None
    }

    /// The decorated class, not yet registered.
    #[must_use]
    fn decorate() -> DecoratedClass<Self> {
        define_element(Self::TAG).maybe_options(Self::registration_options()).apply::<Self>()
    }

    /// Decorates and finalizes in one step.
    ///
    /// # Errors
    /// Propagates the registry's error unchanged.
    fn define(registry: &dyn ElementRegistry) -> Result<(), RegistryError> {
        Self::decorate().finalize(registry)
    }
}
