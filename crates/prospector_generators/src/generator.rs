//! Generator and body-resource traits.

use crate::error::GeneratorError;
use prospector_document::ConfigNode;
use prospector_grid::Cell;
use std::sync::Arc;

/// A celestial body as seen by generators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Body {
    name: String,
}

impl Body {
    /// Creates a body handle.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the body's unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Resource present at one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deposit {
    /// Amount currently present.
    pub quantity: f64,
    /// Amount present when the deposit was generated.
    pub max_quantity: f64,
}

/// Deposit map for one resource on one body.
///
/// Produced by a [`ResourceGenerator`] and owned by the store, which replaces
/// it wholesale on regeneration.
pub trait BodyResources: Send + Sync {
    /// Returns the deposit under `cell`, if any.
    fn resource(&self, cell: Cell) -> Option<Deposit>;

    /// Serializes per-body state, or returns `None` if there is nothing to keep.
    fn save(&self) -> Option<ConfigNode>;
}

/// Algorithm that produces a [`BodyResources`] for each body.
///
/// # Example
///
/// ```
/// use prospector_document::ConfigNode;
/// use prospector_generators::{Body, BodyResources, Deposit, ResourceGenerator};
/// use prospector_grid::Cell;
///
/// struct Everywhere;
/// struct EverywhereResources;
///
/// impl BodyResources for EverywhereResources {
///     fn resource(&self, _cell: Cell) -> Option<Deposit> {
///         Some(Deposit { quantity: 1.0, max_quantity: 1.0 })
///     }
///
///     fn save(&self) -> Option<ConfigNode> {
///         None
///     }
/// }
///
/// impl ResourceGenerator for Everywhere {
///     fn load(&self, _body: &Body, _data: Option<&ConfigNode>) -> Box<dyn BodyResources> {
///         Box::new(EverywhereResources)
///     }
/// }
/// ```
pub trait ResourceGenerator: Send + Sync + 'static {
    /// Builds the deposit map for `body`.
    ///
    /// `data` is the per-body state previously returned by
    /// [`BodyResources::save`], or `None` to generate from defaults.
    fn load(&self, body: &Body, data: Option<&ConfigNode>) -> Box<dyn BodyResources>;

    /// Name this generator is registered under, if it has one.
    fn name(&self) -> Option<&str> {
        None
    }
}

/// A generator type that can be registered by name.
pub trait NamedGenerator: ResourceGenerator + Sized {
    /// Name used in the `name` value of generator configs.
    const NAME: &'static str;

    /// Constructs the generator from its config node.
    ///
    /// # Errors
    ///
    /// Returns a [`GeneratorError`] if the config is invalid.
    fn from_config(config: &ConfigNode) -> Result<Self, GeneratorError>;
}

/// Constructs generators from config nodes.
///
/// Implemented for any `Fn(&ConfigNode) -> Result<Arc<dyn ResourceGenerator>, GeneratorError>`.
pub trait GeneratorFactory: Send + Sync {
    /// Creates a generator from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeneratorError`] if the generator cannot be built.
    fn create(&self, config: &ConfigNode) -> Result<Arc<dyn ResourceGenerator>, GeneratorError>;
}

impl<F> GeneratorFactory for F
where
    F: Fn(&ConfigNode) -> Result<Arc<dyn ResourceGenerator>, GeneratorError> + Send + Sync,
{
    fn create(&self, config: &ConfigNode) -> Result<Arc<dyn ResourceGenerator>, GeneratorError> {
        self(config)
    }
}
