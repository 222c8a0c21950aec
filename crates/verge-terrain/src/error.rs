//! Configuration error types.

use std::fmt;

/// Errors detected while loading or validating a terrain configuration.
///
/// Malformed configuration is a hard failure at load time — a table that
/// references an undeclared group must never reach a resolver. Missing
/// *tile entries*, by contrast, are tolerated at resolve time with a
/// fallback and a logged warning, so content iteration is never blocked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration text failed to parse.
    Parse {
        /// The parser's description of the failure.
        message: String,
    },
    /// Two groups share a name.
    DuplicateGroup {
        /// The repeated name.
        name: String,
    },
    /// Two circuits share a name.
    DuplicateCircuit {
        /// The repeated name.
        name: String,
    },
    /// The same group pair is declared by two transition tables.
    DuplicateTransition {
        /// Source group of the pair.
        from: String,
        /// Target group of the pair.
        to: String,
    },
    /// A table references a group that was never declared.
    UndeclaredGroup {
        /// The missing group name.
        name: String,
        /// The declaration that referenced it.
        referenced_by: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { message } => write!(f, "config parse error: {message}"),
            Self::DuplicateGroup { name } => write!(f, "group '{name}' declared twice"),
            Self::DuplicateCircuit { name } => write!(f, "circuit '{name}' declared twice"),
            Self::DuplicateTransition { from, to } => {
                write!(f, "transition '{from}' -> '{to}' declared twice")
            }
            Self::UndeclaredGroup {
                name,
                referenced_by,
            } => write!(f, "'{referenced_by}' references undeclared group '{name}'"),
        }
    }
}

impl std::error::Error for ConfigError {}
