//! The terrain transition resolver.

use crate::access::TileAccess;
use crate::config::TerrainTables;
use indexmap::IndexSet;
use smallvec::SmallVec;
use verge_core::{BorderCategory, BorderClassifier, Connectivity, Dir8, GroupId, TileAssignment};
use verge_grid::{BorderField, ChangeSet, Footprint, GridDims};

/// Resolves the drawable tile for cells whose group membership changed,
/// so adjacent terrain groups blend through transition tiles instead of
/// showing a hard seam.
///
/// The resolver owns one 8-connected [`BorderField`] per declared group —
/// a cell is "present" in exactly the field of the group it belongs to.
/// Membership edits go through [`paint`](Self::paint) and
/// [`erase`](Self::erase); [`resolve`](Self::resolve) then syncs tiles
/// for a cell and its eight neighbours from the stored categories.
///
/// `resolve` is idempotent: on a settled region it returns an empty
/// [`ChangeSet`]. It also never writes to a cell occupied by a circuit —
/// crossing into circuit territory is the caller's explicit second phase,
/// not an automatic cascade.
#[derive(Debug)]
pub struct TransitionResolver {
    fields: Vec<BorderField<BorderClassifier>>,
    warned: IndexSet<(GroupId, Option<GroupId>, BorderCategory)>,
}

impl TransitionResolver {
    /// Create a resolver with one empty field per declared group.
    pub fn new(tables: &TerrainTables, dims: GridDims) -> Self {
        Self {
            fields: (0..tables.group_count())
                .map(|_| BorderField::new(dims))
                .collect(),
            warned: IndexSet::new(),
        }
    }

    /// The stored border category of `(x, y)` within `group`'s field.
    pub fn category(&self, group: GroupId, x: i32, y: i32) -> BorderCategory {
        self.fields
            .get(group.0 as usize)
            .map_or(BorderCategory::None, |f| f.category(x, y))
    }

    /// Paint `group` over the brush box of `radius` around `(x, y)`:
    /// grow the group's presence, release every claimed cell from its
    /// previous owner, and sync the affected tiles.
    ///
    /// Returns the cells whose tile changed, for the editor to repaint.
    /// Degenerate radii, off-grid brushes, and unknown group IDs are
    /// no-ops.
    pub fn paint<M: TileAccess>(
        &mut self,
        tables: &TerrainTables,
        map: &mut M,
        x: i32,
        y: i32,
        group: GroupId,
        radius: i32,
    ) -> ChangeSet {
        if self.fields.get(group.0 as usize).is_none() || radius <= 0 {
            return ChangeSet::empty();
        }
        let dims = map.dims();
        let Some(area) = Footprint::cell(x, y).expand(radius as u32).clamped(&dims) else {
            return ChangeSet::empty();
        };

        let mut changed = self.fields[group.0 as usize].include(Footprint::cell(x, y), radius);
        for (cx, cy) in area.cells() {
            let old = map.group_at(cx, cy);
            if old == Some(group) {
                continue;
            }
            if let Some(o) = old {
                if let Some(field) = self.fields.get_mut(o.0 as usize) {
                    changed.merge(field.exclude(cx, cy));
                }
            }
            map.set_group(cx, cy, Some(group));
        }
        self.sync_tiles(tables, map, &changed)
    }

    /// Remove the single cell `(x, y)` from its group and sync the
    /// affected tiles. A no-op on unowned or off-grid cells.
    pub fn erase<M: TileAccess>(
        &mut self,
        tables: &TerrainTables,
        map: &mut M,
        x: i32,
        y: i32,
    ) -> ChangeSet {
        let Some(old) = map.group_at(x, y) else {
            return ChangeSet::empty();
        };
        let changed = match self.fields.get_mut(old.0 as usize) {
            Some(field) => field.exclude(x, y),
            None => ChangeSet::empty(),
        };
        map.set_group(x, y, None);
        self.sync_tiles(tables, map, &changed)
    }

    /// Sync the drawable tile of `(x, y)` and its eight neighbours
    /// against the stored categories. Returns the cells whose tile
    /// changed — empty on an already-consistent region.
    pub fn resolve<M: TileAccess>(
        &mut self,
        tables: &TerrainTables,
        map: &mut M,
        x: i32,
        y: i32,
    ) -> ChangeSet {
        let dims = map.dims();
        let mut cells: SmallVec<[(i32, i32); 9]> = SmallVec::new();
        if dims.contains(x, y) {
            cells.push((x, y));
        }
        cells.extend(dims.neighbours(x, y, Connectivity::Eight));

        let mut updated = Vec::new();
        for (cx, cy) in cells {
            if map.circuit_at(cx, cy).is_some() {
                continue;
            }
            let desired = self.desired_tile(tables, map, cx, cy);
            if map.tile_at(cx, cy) != desired {
                map.set_tile(cx, cy, desired);
                updated.push((cx, cy));
            }
        }
        ChangeSet::from_unsorted(updated)
    }

    /// Rebuild every group field from the map's membership data and
    /// reclassify from scratch. The load-time path: classification is
    /// never persisted, only recovered.
    pub fn rebuild<M: TileAccess>(&mut self, map: &M) {
        for field in &mut self.fields {
            field.clear();
        }
        for (x, y) in map.dims().full_footprint().cells() {
            if let Some(g) = map.group_at(x, y) {
                if let Some(field) = self.fields.get_mut(g.0 as usize) {
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

    /// The tile `(x, y)` should carry right now, or `None` for unowned
    /// cells.
    ///
    /// Lookup order: the declared transition table for (group, dominant
    /// foreign neighbour), then the group's own edge set, then the
    /// group's neutral blend tile. Landing on the blend tile means the
    /// tables have a gap; that is logged once per missing key and never
    /// fails — terrain must stay paintable while its art is incomplete.
    fn desired_tile<M: TileAccess>(
        &mut self,
        tables: &TerrainTables,
        map: &M,
        x: i32,
        y: i32,
    ) -> Option<TileAssignment> {
        let group = map.group_at(x, y)?;
        let spec = tables.group(group)?;
        let category = self.category(group, x, y);
        let foreign = foreign_neighbour(map, x, y, group);

        if let Some(f) = foreign {
            if let Some(pair) = tables.transition(group, f) {
                if let Some(tile) = pair.get(category) {
                    return Some(tile);
                }
            }
        }
        if let Some(tile) = spec.tiles.get(category) {
            return Some(tile);
        }
        if self.warned.insert((group, foreign, category)) {
            match foreign.and_then(|f| tables.group(f)) {
                Some(other) => log::warn!(
                    "no transition tile for '{}' -> '{}' category {:?}; using blend fallback",
                    spec.name,
                    other.name,
                    category
                ),
                None => log::warn!(
                    "no tile for group '{}' category {:?}; using blend fallback",
                    spec.name,
                    category
                ),
            }
        }
        Some(spec.blend)
    }
}

/// The dominant foreign group adjacent to `(x, y)`: the one occupying the
/// most of the eight neighbours that do not belong to `group`.
///
/// Ties break by scan order — cardinals clockwise from north, then
/// diagonals clockwise from north-east — with the first-seen group
/// winning.
fn foreign_neighbour<M: TileAccess>(map: &M, x: i32, y: i32, group: GroupId) -> Option<GroupId> {
    let mut tally: SmallVec<[(GroupId, u32); 4]> = SmallVec::new();
    for dir in Dir8::CARDINALS.into_iter().chain(Dir8::DIAGONALS) {
        let (dx, dy) = dir.offset();
        if let Some(f) = map.group_at(x + dx, y + dy) {
            if f != group {
                match tally.iter_mut().find(|(g, _)| *g == f) {
                    Some(entry) => entry.1 += 1,
                    None => tally.push((f, 1)),
                }
            }
        }
    }
    let mut best: Option<(GroupId, u32)> = None;
    for (g, c) in tally {
        if best.map_or(true, |(_, bc)| c > bc) {
            best = Some((g, c));
        }
    }
    best.map(|(g, _)| g)
}
