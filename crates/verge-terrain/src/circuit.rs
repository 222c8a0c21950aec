//! The circuit resolver for linear chain features.

use crate::access::TileAccess;
use crate::config::TerrainTables;
use indexmap::IndexSet;
use smallvec::SmallVec;
use verge_core::{ChainCategory, ChainClassifier, CircuitId, Connectivity, TileAssignment};
use verge_grid::{BorderField, ChangeSet, GridDims};

/// Resolves the drawable tile for linear, non-branching chain features —
/// roads, rivers, walls — connecting only through the four cardinal
/// directions.
///
/// Structurally the twin of
/// [`TransitionResolver`](crate::TransitionResolver) over a 4-connected
/// [`BorderField`] per circuit kind, with the connectivity category set
/// (ends, straights, corners, tees, crossings) in place of the border
/// set. Circuits share no state with the terrain resolver; where a
/// terrain edit must refresh an adjacent road surface, the caller invokes
/// this resolver explicitly as a second phase.
///
/// Chain edits are single-cell: a circuit is drawn cell by cell, so
/// [`paint`](Self::paint) stages one presence bit and reclassifies the
/// cell plus its ring, rather than growing a brush box.
#[derive(Debug)]
pub struct CircuitResolver {
    fields: Vec<BorderField<ChainClassifier>>,
    warned: IndexSet<(CircuitId, ChainCategory)>,
}

impl CircuitResolver {
    /// Create a resolver with one empty field per declared circuit.
    pub fn new(tables: &TerrainTables, dims: GridDims) -> Self {
        Self {
            fields: (0..tables.circuit_count())
                .map(|_| BorderField::new(dims))
                .collect(),
            warned: IndexSet::new(),
        }
    }

    /// The stored connectivity category of `(x, y)` within `circuit`'s
    /// field.
    pub fn category(&self, circuit: CircuitId, x: i32, y: i32) -> ChainCategory {
        self.fields
            .get(circuit.0 as usize)
            .map_or(ChainCategory::None, |f| f.category(x, y))
    }

    /// Lay one cell of `circuit` at `(x, y)`, replacing any other circuit
    /// occupying the cell, and sync the affected tiles.
    ///
    /// Returns the cells whose tile changed. Off-grid coordinates and
    /// unknown circuit IDs are no-ops.
    pub fn paint<M: TileAccess>(
        &mut self,
        tables: &TerrainTables,
        map: &mut M,
        x: i32,
        y: i32,
        circuit: CircuitId,
    ) -> ChangeSet {
        if self.fields.get(circuit.0 as usize).is_none() || !map.dims().contains(x, y) {
            return ChangeSet::empty();
        }
        let old = map.circuit_at(x, y);
        let mut changed = ChangeSet::empty();
        if old != Some(circuit) {
            if let Some(o) = old {
                if let Some(field) = self.fields.get_mut(o.0 as usize) {
                    changed.merge(field.exclude(x, y));
                }
            }
            let field = &mut self.fields[circuit.0 as usize];
            field.stage_present(x, y, true);
            changed.merge(field.reclassify_region(x, y, 1));
            map.set_circuit(x, y, Some(circuit));
        }
        self.sync_tiles(tables, map, &changed)
    }

    /// Remove the circuit cell at `(x, y)` and sync the remaining chain
    /// tiles around it.
    ///
    /// The freed cell's tile is cleared here; restoring its terrain art
    /// is the terrain resolver's job, invoked by the caller as the
    /// reverse second phase. A no-op on cells carrying no circuit.
    pub fn erase<M: TileAccess>(
        &mut self,
        tables: &TerrainTables,
        map: &mut M,
        x: i32,
        y: i32,
    ) -> ChangeSet {
        let Some(old) = map.circuit_at(x, y) else {
            return ChangeSet::empty();
        };
        let changed = match self.fields.get_mut(old.0 as usize) {
            Some(field) => field.exclude(x, y),
            None => ChangeSet::empty(),
        };
        map.set_circuit(x, y, None);
        let mut updated = self.sync_tiles(tables, map, &changed);
        if map.tile_at(x, y).is_some() {
            map.set_tile(x, y, None);
            updated.merge(ChangeSet::from_unsorted(vec![(x, y)]));
        }
        updated
    }

    /// Sync the drawable tile of `(x, y)` and its four cardinal
    /// neighbours for every circuit cell among them. Returns the cells
    /// whose tile changed — empty on an already-consistent region.
    pub fn resolve<M: TileAccess>(
        &mut self,
        tables: &TerrainTables,
        map: &mut M,
        x: i32,
        y: i32,
    ) -> ChangeSet {
        let dims = map.dims();
        let mut cells: SmallVec<[(i32, i32); 5]> = SmallVec::new();
        if dims.contains(x, y) {
            cells.push((x, y));
        }
        cells.extend(dims.neighbours(x, y, Connectivity::Four));

        let mut updated = Vec::new();
        for (cx, cy) in cells {
            let Some(circuit) = map.circuit_at(cx, cy) else {
                continue;
            };
            let desired = self.desired_tile(tables, map, circuit, cx, cy);
            if map.tile_at(cx, cy) != desired {
                map.set_tile(cx, cy, desired);
                updated.push((cx, cy));
            }
        }
        ChangeSet::from_unsorted(updated)
    }

    /// Rebuild every circuit field from the map's occupancy data and
    /// reclassify from scratch — the load-time path.
    pub fn rebuild<M: TileAccess>(&mut self, map: &M) {
        for field in &mut self.fields {
            field.clear();
        }
        for (x, y) in map.dims().full_footprint().cells() {
            if let Some(c) = map.circuit_at(x, y) {
                if let Some(field) = self.fields.get_mut(c.0 as usize) {
                    field.stage_present(x, y, true);
                }
            }
        }
        for field in &mut self.fields {
            field.reclassify_all();
        }
    }

    fn sync_tiles<M: TileAccess>(
        &mut self,
        tables: &TerrainTables,
        map: &mut M,
        changed: &ChangeSet,
    ) -> ChangeSet {
        let mut updated = ChangeSet::empty();
        for (cx, cy) in changed.iter() {
            updated.merge(self.resolve(tables, map, cx, cy));
        }
        updated
    }

    /// The tile a circuit cell should carry: its connectivity shape on
    /// the sheet matching the terrain it crosses.
    ///
    /// The underlying group selects a surface sheet override when the
    /// circuit declares one — a road over dirt draws from the dirt
    /// surface sheet with the same tile layout. A category with no table
    /// entry falls back to the circuit's fallback tile and is logged once
    /// as a configuration gap.
    fn desired_tile<M: TileAccess>(
        &mut self,
        tables: &TerrainTables,
        map: &M,
        circuit: CircuitId,
        x: i32,
        y: i32,
    ) -> Option<TileAssignment> {
        let spec = tables.circuit(circuit)?;
        let category = self.category(circuit, x, y);
        let sheet = map
            .group_at(x, y)
            .and_then(|g| spec.surfaces.get(&g).copied())
            .unwrap_or(spec.sheet);
        let tile = match spec.tiles.get(category) {
            Some(tile) => tile,
            None => {
                if self.warned.insert((circuit, category)) {
                    log::warn!(
                        "no tile for circuit '{}' category {:?}; using fallback",
                        spec.name,
                        category
                    );
                }
                spec.fallback
            }
        };
        Some(TileAssignment::new(sheet, tile.index))
    }
}
