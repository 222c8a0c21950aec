//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
///
/// Grid *operations* never error: out-of-range reads are absent and
/// out-of-range writes are ignored. Only constructing a degenerate grid
/// is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the maximum (coordinates use `i32`).
    DimensionTooLarge {
        /// Which dimension (`"cols"` or `"rows"`).
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed.
        max: u32,
    },
    /// The rendering cell size must be non-zero.
    ZeroCellSize,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::ZeroCellSize => write!(f, "cell size must be non-zero"),
        }
    }
}

impl std::error::Error for GridError {}
