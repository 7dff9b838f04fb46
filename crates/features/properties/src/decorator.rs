use crate::element::ReactiveElement;
use crate::table::PropertyTableBuilder;
use elemental_domain::PropertyDeclaration;

/// How the decorated property is stored on its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// A plain field; getter and setter are generated around it.
    Stored,
    /// The element provides its own accessors; only metadata is registered.
    Accessor,
}

/// Declares a reactive property.
///
/// No validation happens here; the declaration is handed to the base element as is.
///
/// # Examples
/// ```rust
/// use elemental_properties::{PropertyDeclaration, PropertyTable, ReactiveElement, Value, property};
///
/// #[derive(Default)]
/// struct Meter {
///     level: f64,
/// }
///
/// impl ReactiveElement for Meter {
///     fn request_update(&mut self, _: &'static str, _: Value, _: Value) {}
/// }
///
/// let mut builder = PropertyTable::builder("Meter");
/// property(PropertyDeclaration::builder().reflect(true).build())
///     .stored("level")
///     .finish::<Meter>(&mut builder);
///
/// let table = builder.finalize();
/// assert!(table.get("level").is_some_and(PropertyDeclaration::reflect));
/// ```
#[must_use]
pub const fn property(declaration: PropertyDeclaration) -> PropertyDecorator {
    PropertyDecorator { declaration }
}

/// A declaration waiting for the property it applies to.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDecorator {
    declaration: PropertyDeclaration,
}

impl PropertyDecorator {
    /// Targets a plain field named `name`.
    #[must_use]
    pub const fn stored(self, name: &'static str) -> BoundProperty {
        BoundProperty { name, kind: PropertyKind::Stored, declaration: self.declaration }
    }

    /// Targets an accessor pair the element already defines.
    #[must_use]
    pub const fn accessor(self, name: &'static str) -> BoundProperty {
        BoundProperty { name, kind: PropertyKind::Accessor, declaration: self.declaration }
    }

    #[must_use]
    pub const fn declaration(&self) -> &PropertyDeclaration {
        &self.declaration
    }
}

/// A declaration bound to a named property, ready to be finished.
#[derive(Debug, Clone, Copy)]
pub struct BoundProperty {
    name: &'static str,
    kind: PropertyKind,
    declaration: PropertyDeclaration,
}

impl BoundProperty {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }

    #[must_use]
    pub const fn declaration(&self) -> &PropertyDeclaration {
        &self.declaration
    }

    /// Hands the declaration to `E::add_class_property`.
    pub fn finish<E: ReactiveElement>(self, builder: &mut PropertyTableBuilder) {
        E::add_class_property(builder, self.name, self.declaration);
    }
}
