//! Strongly-typed identifiers and tile assignments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a terrain group declared in the map configuration.
///
/// Groups are registered at config-validation time and assigned sequential
/// IDs in declaration order. `GroupId(n)` is the n-th declared group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u16);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for GroupId {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// Identifies a circuit kind (road, river, wall) declared in the map
/// configuration. Assigned sequentially in declaration order, like
/// [`GroupId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CircuitId(pub u16);

impl fmt::Display for CircuitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for CircuitId {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// Identifies a tile sheet (one loaded sprite-sheet image).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SheetId(pub u16);

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for SheetId {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// A concrete drawable tile: a sheet plus an index into that sheet.
///
/// This is the value the resolvers write into the map and the renderer
/// reads back out. It carries no category information — category identity
/// stays separate from presentation, and the mapping between them lives in
/// [`TileTable`](crate::TileTable) lookup tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileAssignment {
    /// The sheet the tile is drawn from.
    pub sheet: SheetId,
    /// Zero-based tile index within the sheet.
    pub index: u16,
}

impl TileAssignment {
    /// Convenience constructor.
    pub fn new(sheet: SheetId, index: u16) -> Self {
        Self { sheet, index }
    }
}

impl fmt::Display for TileAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.sheet, self.index)
    }
}
