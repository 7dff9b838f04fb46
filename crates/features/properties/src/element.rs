use crate::table::{PropertyTable, PropertyTableBuilder};
use elemental_domain::{PropertyDeclaration, Value};

/// The base element collaborator.
///
/// Rendering and attribute wiring live behind this trait; property binding only needs
/// the change hook and the place where class metadata is collected.
pub trait ReactiveElement {
    /// Called by every generated setter, once per set, with the property's name and its
    /// previous and current value. Deciding whether anything changed is up to the
    /// implementation (usually through the declaration's `modified` predicate).
    fn request_update(&mut self, name: &'static str, old: Value, new: Value);

    /// Receives each property declaration of the type while its table is built.
    fn add_class_property(
        builder: &mut PropertyTableBuilder,
        name: &'static str,
        declaration: PropertyDeclaration,
    ) where
        Self: Sized,
    {
        builder.insert(name, declaration);
    }
}

/// Types with a finalized property table, usually through `#[derive(Properties)]`.
pub trait Properties: ReactiveElement {
    fn class_properties() -> &'static PropertyTable;

    /// Declaration of `name`, if the type declares it.
    fn property_declaration(name: &str) -> Option<&'static PropertyDeclaration> {
        Self::class_properties().get(name)
    }
}
