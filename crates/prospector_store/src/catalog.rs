//! Resource and body catalogs.
//!
//! The host decides which resource kinds and bodies exist. Catalogs assign
//! each a dense typed ID in insertion order; the store indexes its data by
//! those IDs and uses names only when reading or writing documents.

use crate::error::StoreError;
use indexmap::IndexMap;
use prospector_document::ConfigNode;
use prospector_generators::Body;

/// Node name of a resource definition in a catalog document.
pub const DEFINITION_NODE: &str = "ResourceDefinition";

/// Index of a resource kind in a [`ResourceCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(usize);

impl ResourceId {
    /// Returns the position in the catalog.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a body in a [`BodyCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(usize);

impl BodyId {
    /// Returns the position in the catalog.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A resource kind and the generator config it starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDefinition {
    name: String,
    generator: ConfigNode,
}

impl ResourceDefinition {
    /// Creates a definition. The generator node is stored under the name `Generator`.
    #[must_use]
    pub fn new(name: impl Into<String>, generator: &ConfigNode) -> Self {
        Self {
            name: name.into(),
            generator: generator.renamed("Generator"),
        }
    }

    /// Returns the resource name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default generator config.
    #[must_use]
    pub fn generator(&self) -> &ConfigNode {
        &self.generator
    }
}

/// Ordered catalog of resource kinds.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    definitions: IndexMap<String, ResourceDefinition>,
}

impl ResourceCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every `ResourceDefinition` node of `document`.
    ///
    /// ```
    /// use prospector_document::ConfigNode;
    /// use prospector_store::ResourceCatalog;
    ///
    /// let document = ConfigNode::parse(
    ///     "ResourceDefinition\n{\nResource = Ore\nGenerator\n{\nname = EmptyResourceGenerator\n}\n}\n",
    /// )
    /// .unwrap();
    ///
    /// let catalog = ResourceCatalog::from_document(&document).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCatalog`] if a definition lacks its
    /// `Resource` value or `Generator` node, and
    /// [`StoreError::DuplicateResource`] if a name repeats.
    pub fn from_document(document: &ConfigNode) -> Result<Self, StoreError> {
        let mut catalog = Self::new();
        for (position, node) in document.nodes(DEFINITION_NODE).enumerate() {
            let name = node.value("Resource").ok_or_else(|| {
                StoreError::InvalidCatalog(format!("definition #{position} has no 'Resource' value"))
            })?;
            let generator = node.node("Generator").ok_or_else(|| {
                StoreError::InvalidCatalog(format!("'{name}' has no 'Generator' node"))
            })?;
            catalog.push(name, generator)?;
        }
        Ok(catalog)
    }

    /// Appends a resource kind.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateResource`] if the name is already present.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        generator: &ConfigNode,
    ) -> Result<ResourceId, StoreError> {
        let name = name.into();
        if self.definitions.contains_key(&name) {
            return Err(StoreError::DuplicateResource(name));
        }
        let definition = ResourceDefinition::new(name.clone(), generator);
        let (index, _) = self.definitions.insert_full(name, definition);
        Ok(ResourceId(index))
    }

    /// Returns the ID of the named resource.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<ResourceId> {
        self.definitions.get_index_of(name).map(ResourceId)
    }

    /// Returns the definition with the given ID.
    #[must_use]
    pub fn get(&self, id: ResourceId) -> Option<&ResourceDefinition> {
        self.definitions.get_index(id.0).map(|(_, def)| def)
    }

    /// Iterates definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceId, &ResourceDefinition)> {
        self.definitions
            .values()
            .enumerate()
            .map(|(index, def)| (ResourceId(index), def))
    }

    /// Returns the number of resource kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Ordered catalog of celestial bodies.
#[derive(Debug, Clone, Default)]
pub struct BodyCatalog {
    bodies: IndexMap<String, Body>,
}

impl BodyCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from body names.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateBody`] if a name repeats.
    pub fn from_names<I, S>(names: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for name in names {
            catalog.push(name)?;
        }
        Ok(catalog)
    }

    /// Appends a body.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateBody`] if the name is already present.
    pub fn push(&mut self, name: impl Into<String>) -> Result<BodyId, StoreError> {
        let name = name.into();
        if self.bodies.contains_key(&name) {
            return Err(StoreError::DuplicateBody(name));
        }
        let body = Body::new(name.clone());
        let (index, _) = self.bodies.insert_full(name, body);
        Ok(BodyId(index))
    }

    /// Returns the ID of the named body.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<BodyId> {
        self.bodies.get_index_of(name).map(BodyId)
    }

    /// Returns the body with the given ID.
    #[must_use]
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get_index(id.0).map(|(_, body)| body)
    }

    /// Iterates bodies in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies
            .values()
            .enumerate()
            .map(|(index, body)| (BodyId(index), body))
    }

    /// Returns the number of bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns `true` if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(name: &str) -> ConfigNode {
        let mut node = ConfigNode::new("Whatever");
        node.add_value("name", name);
        node
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut catalog = ResourceCatalog::new();
        let ore = catalog.push("Ore", &generator("EmptyResourceGenerator")).unwrap();
        let gas = catalog.push("Gas", &generator("EmptyResourceGenerator")).unwrap();

        assert_eq!(ore.index(), 0);
        assert_eq!(gas.index(), 1);
        assert_eq!(catalog.id_of("Gas"), Some(gas));
        assert_eq!(catalog.get(ore).unwrap().name(), "Ore");
    }

    #[test]
    fn generator_node_is_renamed() {
        let mut catalog = ResourceCatalog::new();
        let id = catalog.push("Ore", &generator("EmptyResourceGenerator")).unwrap();
        assert_eq!(catalog.get(id).unwrap().generator().name(), "Generator");
    }

    #[test]
    fn duplicate_resource_rejected() {
        let mut catalog = ResourceCatalog::new();
        catalog.push("Ore", &generator("A")).unwrap();
        let err = catalog.push("Ore", &generator("B")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateResource(name) if name == "Ore"));
    }

    #[test]
    fn from_document_requires_generator() {
        let mut document = ConfigNode::default();
        document
            .add_node(ConfigNode::new(DEFINITION_NODE))
            .add_value("Resource", "Ore");

        let err = ResourceCatalog::from_document(&document).unwrap_err();
        assert!(matches!(err, StoreError::InvalidCatalog(_)));
    }

    #[test]
    fn from_document_reads_definitions_in_order() {
        let mut document = ConfigNode::default();
        for name in ["Ore", "Water"] {
            let definition = document.add_node(ConfigNode::new(DEFINITION_NODE));
            definition.add_value("Resource", name);
            definition.add_node(generator("LegacyResourceGenerator").renamed("Generator"));
        }

        let catalog = ResourceCatalog::from_document(&document).unwrap();
        let names: Vec<&str> = catalog.iter().map(|(_, def)| def.name()).collect();
        assert_eq!(names, vec!["Ore", "Water"]);
    }

    #[test]
    fn body_catalog_from_names() {
        let catalog = BodyCatalog::from_names(["Kerbin", "Mun", "Minmus"]).unwrap();
        assert_eq!(catalog.len(), 3);
        let mun = catalog.id_of("Mun").unwrap();
        assert_eq!(catalog.get(mun).unwrap().name(), "Mun");
        assert!(catalog.id_of("Duna").is_none());
    }

    #[test]
    fn duplicate_body_rejected() {
        let err = BodyCatalog::from_names(["Mun", "Mun"]).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateBody(name) if name == "Mun"));
    }
}
