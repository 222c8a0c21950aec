//! The [`TileMap`] value and the two-phase editing protocol.

use verge_core::{BorderCategory, ChainCategory, CircuitId, GroupId, TileAssignment};
use verge_fog::{FogMode, FogTracker, Observer};
use verge_grid::{ChangeSet, Footprint, GridDims};
use verge_terrain::{CircuitResolver, TerrainTables, TileAccess, TransitionResolver};

/// Plain per-cell storage: group membership, circuit occupancy, and the
/// drawable tile. This is the [`TileAccess`] implementation the resolvers
/// write through.
#[derive(Clone, Debug)]
pub(crate) struct CellGrid {
    dims: GridDims,
    groups: Vec<Option<GroupId>>,
    circuits: Vec<Option<CircuitId>>,
    tiles: Vec<Option<TileAssignment>>,
}

impl CellGrid {
    pub(crate) fn new(dims: GridDims) -> Self {
        let count = dims.cell_count();
        Self {
            dims,
            groups: vec![None; count],
            circuits: vec![None; count],
            tiles: vec![None; count],
        }
    }
}

impl TileAccess for CellGrid {
    fn dims(&self) -> GridDims {
        self.dims
    }

    fn group_at(&self, x: i32, y: i32) -> Option<GroupId> {
        self.dims.index(x, y).and_then(|i| self.groups[i])
    }

    fn set_group(&mut self, x: i32, y: i32, group: Option<GroupId>) {
        if let Some(i) = self.dims.index(x, y) {
            self.groups[i] = group;
        }
    }

    fn circuit_at(&self, x: i32, y: i32) -> Option<CircuitId> {
        self.dims.index(x, y).and_then(|i| self.circuits[i])
    }

    fn set_circuit(&mut self, x: i32, y: i32, circuit: Option<CircuitId>) {
        if let Some(i) = self.dims.index(x, y) {
            self.circuits[i] = circuit;
        }
    }

    fn tile_at(&self, x: i32, y: i32) -> Option<TileAssignment> {
        self.dims.index(x, y).and_then(|i| self.tiles[i])
    }

    fn set_tile(&mut self, x: i32, y: i32, tile: Option<TileAssignment>) {
        if let Some(i) = self.dims.index(x, y) {
            self.tiles[i] = tile;
        }
    }
}

/// A map with its editing capabilities attached at construction time.
///
/// The map owns the per-cell state, the validated terrain tables, both
/// resolvers, and optionally a fog tracker. Every editing operation
/// returns the [`ChangeSet`] of cells whose drawable tile changed, for
/// the editor to repaint; on an already-consistent region every operation
/// returns the empty set.
///
/// All mutation is synchronous and single-threaded — the editor UI thread
/// or the game's simulation tick. Readers must not cache tiles or
/// categories across an edit.
#[derive(Debug)]
pub struct TileMap {
    pub(crate) cells: CellGrid,
    tables: TerrainTables,
    transitions: TransitionResolver,
    circuits: CircuitResolver,
    fog: Option<FogTracker>,
}

impl TileMap {
    /// Create an empty map over validated tables, with a fog tracker
    /// when `fog` is given.
    pub fn new(dims: GridDims, tables: TerrainTables, fog: Option<FogMode>) -> Self {
        Self {
            cells: CellGrid::new(dims),
            transitions: TransitionResolver::new(&tables, dims),
            circuits: CircuitResolver::new(&tables, dims),
            fog: fog.map(|mode| FogTracker::new(dims, mode)),
            tables,
        }
    }

    pub(crate) fn from_parts(cells: CellGrid, tables: TerrainTables, fog: Option<FogMode>) -> Self {
        let dims = cells.dims;
        let mut transitions = TransitionResolver::new(&tables, dims);
        let mut circuits = CircuitResolver::new(&tables, dims);
        transitions.rebuild(&cells);
        circuits.rebuild(&cells);
        Self {
            cells,
            tables,
            transitions,
            circuits,
            fog: fog.map(|mode| FogTracker::new(dims, mode)),
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.cells.dims
    }

    /// The validated terrain tables this map resolves against.
    pub fn tables(&self) -> &TerrainTables {
        &self.tables
    }

    /// The drawable tile at `(x, y)`.
    pub fn tile(&self, x: i32, y: i32) -> Option<TileAssignment> {
        self.cells.tile_at(x, y)
    }

    /// Group membership at `(x, y)`.
    pub fn group(&self, x: i32, y: i32) -> Option<GroupId> {
        self.cells.group_at(x, y)
    }

    /// Circuit occupancy at `(x, y)`.
    pub fn circuit(&self, x: i32, y: i32) -> Option<CircuitId> {
        self.cells.circuit_at(x, y)
    }

    /// Border category of `(x, y)` within `group`'s layer.
    pub fn group_category(&self, group: GroupId, x: i32, y: i32) -> BorderCategory {
        self.transitions.category(group, x, y)
    }

    /// Connectivity category of `(x, y)` within `circuit`'s layer.
    pub fn circuit_category(&self, circuit: CircuitId, x: i32, y: i32) -> ChainCategory {
        self.circuits.category(circuit, x, y)
    }

    /// The fog tracker, when this map tracks fog.
    pub fn fog(&self) -> Option<&FogTracker> {
        self.fog.as_ref()
    }

    /// Mutable access to the fog tracker.
    pub fn fog_mut(&mut self) -> Option<&mut FogTracker> {
        self.fog.as_mut()
    }

    /// Run one fog visibility tick over the tracked party's observers.
    /// A no-op on maps without fog.
    pub fn fog_tick<'a, O, I>(&mut self, observers: I)
    where
        O: Observer + 'a,
        I: IntoIterator<Item = &'a O>,
    {
        if let Some(fog) = self.fog.as_mut() {
            fog.update(observers);
        }
    }

    /// Paint `group` with a brush of `radius` around `(x, y)`.
    ///
    /// Phase one resolves terrain tiles; phase two re-resolves every
    /// circuit cell within the brush's reach plus one ring, so a road
    /// repainted onto different ground refreshes its surface sheet.
    /// Returns all updated cells. Degenerate radii are no-ops.
    pub fn paint_group(&mut self, x: i32, y: i32, group: GroupId, radius: i32) -> ChangeSet {
        if radius <= 0 {
            return ChangeSet::empty();
        }
        let mut updated = self
            .transitions
            .paint(&self.tables, &mut self.cells, x, y, group, radius);
        updated.merge(self.refresh_circuits_in(Footprint::cell(x, y).expand(radius as u32 + 1)));
        updated
    }

    /// Remove the single cell `(x, y)` from its group, then refresh any
    /// circuit in the cell's immediate reach.
    pub fn erase_group(&mut self, x: i32, y: i32) -> ChangeSet {
        let mut updated = self
            .transitions
            .erase(&self.tables, &mut self.cells, x, y);
        updated.merge(self.refresh_circuits_in(Footprint::cell(x, y).expand(1)));
        updated
    }

    /// Lay one cell of `circuit` at `(x, y)`. The circuit tile replaces
    /// the terrain tile on that cell until the circuit is erased.
    pub fn paint_circuit(&mut self, x: i32, y: i32, circuit: CircuitId) -> ChangeSet {
        self.circuits
            .paint(&self.tables, &mut self.cells, x, y, circuit)
    }

    /// Remove the circuit cell at `(x, y)`, then hand the freed cell back
    /// to the terrain resolver — the reverse second phase.
    pub fn erase_circuit(&mut self, x: i32, y: i32) -> ChangeSet {
        let mut updated = self.circuits.erase(&self.tables, &mut self.cells, x, y);
        updated.merge(
            self.transitions
                .resolve(&self.tables, &mut self.cells, x, y),
        );
        updated
    }

    /// Re-resolve both domains around `(x, y)` — the editor's manual
    /// consistency sweep. Idempotent; returns whatever was stale.
    pub fn resolve(&mut self, x: i32, y: i32) -> ChangeSet {
        let mut updated = self
            .transitions
            .resolve(&self.tables, &mut self.cells, x, y);
        updated.merge(self.circuits.resolve(&self.tables, &mut self.cells, x, y));
        updated
    }

    /// Re-resolve every circuit cell inside `area` — the explicit second
    /// phase of a terrain edit.
    fn refresh_circuits_in(&mut self, area: Footprint) -> ChangeSet {
        let mut updated = ChangeSet::empty();
        let Some(area) = area.clamped(&self.cells.dims) else {
            return updated;
        };
        for (cx, cy) in area.cells() {
            if self.cells.circuit_at(cx, cy).is_some() {
                updated.merge(self.circuits.resolve(&self.tables, &mut self.cells, cx, cy));
            }
        }
        updated
    }
}
