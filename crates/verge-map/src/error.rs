//! Map load errors.

use std::fmt;
use verge_grid::GridError;

/// Errors detected while reconstructing a [`TileMap`](crate::TileMap)
/// from saved data.
///
/// Like configuration validation, loading fails fast: saved cells that
/// reference groups or circuits missing from the active tables never
/// reach a resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The saved dimensions do not form a valid grid.
    Grid(GridError),
    /// The cell array length disagrees with the saved dimensions.
    CellCountMismatch {
        /// `cols * rows` from the saved dimensions.
        expected: usize,
        /// Actual length of the saved cell array.
        found: usize,
    },
    /// A cell references a group index the tables do not declare.
    UnknownGroup {
        /// The out-of-range group index.
        index: u16,
    },
    /// A cell references a circuit index the tables do not declare.
    UnknownCircuit {
        /// The out-of-range circuit index.
        index: u16,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "invalid saved dimensions: {err}"),
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
            Self::UnknownGroup { index } => {
                write!(f, "saved cell references unknown group {index}")
            }
            Self::UnknownCircuit { index } => {
                write!(f, "saved cell references unknown circuit {index}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for LoadError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
