//! The [`TileAccess`] trait — the seam between resolvers and the map.

use verge_core::{CircuitId, GroupId, TileAssignment};
use verge_grid::GridDims;

/// Per-cell map state as the resolvers see it: grid dimensions, group and
/// circuit membership, and a stable `(x, y) → tile` lookup.
///
/// # Contract
///
/// - Out-of-grid reads return `None`; out-of-grid writes are ignored.
///   Resolvers probe neighbourhoods freely and never bounds-check first.
/// - Reads must reflect the latest write within the same call — the map
///   is mutated destructively, not copy-on-write.
/// - Implementations do not resolve anything themselves; they are plain
///   storage.
pub trait TileAccess {
    /// Grid dimensions.
    fn dims(&self) -> GridDims;

    /// Group membership of `(x, y)`.
    fn group_at(&self, x: i32, y: i32) -> Option<GroupId>;

    /// Set group membership of `(x, y)`.
    fn set_group(&mut self, x: i32, y: i32, group: Option<GroupId>);

    /// Circuit occupancy of `(x, y)`.
    fn circuit_at(&self, x: i32, y: i32) -> Option<CircuitId>;

    /// Set circuit occupancy of `(x, y)`.
    fn set_circuit(&mut self, x: i32, y: i32, circuit: Option<CircuitId>);

    /// The drawable tile currently assigned to `(x, y)`.
    fn tile_at(&self, x: i32, y: i32) -> Option<TileAssignment>;

    /// Assign (or clear) the drawable tile of `(x, y)`.
    fn set_tile(&mut self, x: i32, y: i32, tile: Option<TileAssignment>);
}
