use elemental_domain::PropertyDeclaration;
use fxhash::FxHashMap;
use tracing::debug;

/// Finalized class metadata: property name to declaration, in declaration order.
///
/// Read-only once built. Derived types keep theirs in a `static`, so it exists once per type.
#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    owner: &'static str,
    entries: Vec<(&'static str, PropertyDeclaration)>,
    index: FxHashMap<&'static str, usize>,
}

impl PropertyTable {
    /// Starts collecting properties for the type named `owner`.
    #[must_use]
    pub fn builder(owner: &'static str) -> PropertyTableBuilder {
        PropertyTableBuilder { table: Self { owner, ..Self::default() } }
    }

    /// Name of the type the table describes.
    #[must_use]
    pub const fn owner(&self) -> &'static str {
        self.owner
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyDeclaration> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PropertyDeclaration)> {
        self.entries.iter().map(|(name, decl)| (*name, decl))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Properties mirrored to attributes.
    pub fn reflected(&self) -> impl Iterator<Item = (&'static str, &PropertyDeclaration)> {
        self.iter().filter(|(_, decl)| decl.reflect())
    }

    /// Properties whose changes the base element reacts to.
    pub fn observed(&self) -> impl Iterator<Item = (&'static str, &PropertyDeclaration)> {
        self.iter().filter(|(_, decl)| decl.observe())
    }
}

impl<'a> IntoIterator for &'a PropertyTable {
    type Item = (&'static str, &'a PropertyDeclaration);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Collects declarations while a type's properties are being finished.
#[derive(Debug)]
pub struct PropertyTableBuilder {
    table: PropertyTable,
}

impl PropertyTableBuilder {
    /// Records `declaration` under `name`.
    ///
    /// A second declaration for the same name replaces the first and keeps its position.
    pub fn insert(&mut self, name: &'static str, declaration: PropertyDeclaration) -> &mut Self {
        let table = &mut self.table;
        if let Some(&i) = table.index.get(name) {
            debug!(owner = table.owner, property = name, "Property declaration replaced");
            table.entries[i].1 = declaration;
        } else {
            table.index.insert(name, table.entries.len());
            table.entries.push((name, declaration));
        }
        self
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[must_use]
    pub fn finalize(self) -> PropertyTable {
        debug!(
            owner = self.table.owner,
            properties = self.table.len(),
            reflected = self.table.reflected().count(),
            "Property table finalized"
        );
        self.table
    }
}
