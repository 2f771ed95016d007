use crate::error::GeneratorError;
use crate::generator::{Body, BodyResources, Deposit, NamedGenerator, ResourceGenerator};
use prospector_document::ConfigNode;
use prospector_grid::Cell;

/// Generator that places no deposits.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyResourceGenerator;

impl ResourceGenerator for EmptyResourceGenerator {
    fn load(&self, _body: &Body, _data: Option<&ConfigNode>) -> Box<dyn BodyResources> {
        Box::new(EmptyBodyResources)
    }

    fn name(&self) -> Option<&str> {
        Some(Self::NAME)
    }
}

impl NamedGenerator for EmptyResourceGenerator {
    const NAME: &'static str = "EmptyResourceGenerator";

    fn from_config(_config: &ConfigNode) -> Result<Self, GeneratorError> {
        Ok(Self)
    }
}

/// Body resources with no deposits and nothing to save.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyBodyResources;

impl BodyResources for EmptyBodyResources {
    fn resource(&self, _cell: Cell) -> Option<Deposit> {
        None
    }

    fn save(&self) -> Option<ConfigNode> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_generator_has_no_deposits() {
        let resources = EmptyResourceGenerator.load(&Body::new("Eve"), None);
        assert!(resources.resource(Cell::new(0)).is_none());
        assert!(resources.resource(Cell::new(10_000)).is_none());
        assert!(resources.save().is_none());
    }

    #[test]
    fn ignores_config_contents() {
        let mut config = ConfigNode::new("Generator");
        config.add_value("Anything", "at all");
        assert!(EmptyResourceGenerator::from_config(&config).is_ok());
    }
}
