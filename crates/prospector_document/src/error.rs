//! Error types for document parsing.

use thiserror::Error;

/// Error reading the text form of a [`ConfigNode`](crate::ConfigNode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// A closing brace appeared with no open node.
    #[error("line {line}: unbalanced '}}'")]
    UnbalancedBrace {
        /// One-based line number.
        line: usize,
    },

    /// Text that is neither a value nor a node header.
    #[error("line {line}: unexpected '{token}'")]
    UnexpectedToken {
        /// One-based line number.
        line: usize,
        /// The offending text.
        token: String,
    },

    /// The input ended while a node was still open.
    #[error("node '{name}' is never closed")]
    UnclosedNode {
        /// Name of the innermost open node.
        name: String,
    },
}
