//! Error types for generator resolution and construction.

use thiserror::Error;

/// Errors resolving or instantiating a generator.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The generator config has no `name` value.
    #[error("generator config has no 'name' value")]
    MissingName,

    /// No generator is registered under the requested name.
    #[error("unknown generator: {0}")]
    NotFound(String),

    /// A config value could not be parsed or is out of range.
    #[error("invalid value '{value}' for '{key}'")]
    InvalidConfig {
        /// The offending key.
        key: String,
        /// The raw value.
        value: String,
    },

    /// The factory reported a failure.
    #[error("instantiation failed: {0}")]
    Instantiation(String),

    /// The factory panicked.
    #[error("generator '{0}' panicked during construction")]
    Panicked(String),
}

impl GeneratorError {
    /// Creates an [`InvalidConfig`](Self::InvalidConfig).
    pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an [`Instantiation`](Self::Instantiation).
    pub fn instantiation(msg: impl Into<String>) -> Self {
        Self::Instantiation(msg.into())
    }
}
