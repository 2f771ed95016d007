//! Ordered config document tree for Prospector.
//!
//! Save data is exchanged with the host as a [`ConfigNode`]: a named node
//! holding ordered `key = value` pairs and ordered child nodes. Keys and node
//! names may repeat; lookups by name return the first match.
//!
//! The [`text`] module reads and writes the host's brace-delimited text form:
//!
//! ```text
//! Resource
//! {
//!     Resource = Ore
//!     Body
//!     {
//!         Name = Mun
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use prospector_document::ConfigNode;
//!
//! let mut root = ConfigNode::default();
//! root.add_value("Version", "1.0.0");
//! let resource = root.add_node(ConfigNode::new("Resource"));
//! resource.add_value("Resource", "Ore");
//!
//! let text = root.to_text();
//! assert_eq!(ConfigNode::parse(&text).unwrap(), root);
//! ```

pub mod error;
mod node;
pub mod text;

pub use error::DocumentError;
pub use node::{ConfigNode, ConfigValue};
