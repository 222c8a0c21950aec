//! Incremental presence edits with bounded reclassification.
//!
//! Every edit computes the set `S` of cells whose presence actually
//! flipped, then reclassifies `S ∪ neighbours(S)` only — neighbourhood
//! taken under the field's classifier connectivity. An edit therefore
//! costs O(|S|) regardless of grid size, and a presence change at `(x, y)`
//! can never alter a category more than one neighbour step away.
//!
//! Degenerate inputs (`radius <= 0`, a footprint entirely outside the
//! grid) are no-ops, never errors: editing gestures may transiently
//! compute off-grid coordinates and must not interrupt the caller.

use crate::field::BorderField;
use crate::grid::Footprint;
use verge_core::Classify;

/// A cell position, `(x, y)`.
pub type CellPos = (i32, i32);

/// The sorted, deduplicated set of cells whose stored category changed in
/// one updater or resolver call.
///
/// Cells are ordered row-major (by `y`, then `x`). An empty set means the
/// call found nothing to do — the idempotence fixed point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    cells: Vec<CellPos>,
}

impl ChangeSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from an arbitrarily-ordered list of cells.
    pub fn from_unsorted(mut cells: Vec<CellPos>) -> Self {
        cells.sort_unstable_by_key(|&(x, y)| (y, x));
        cells.dedup();
        Self { cells }
    }

    /// Returns `true` if no cell changed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of changed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the set contains `(x, y)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cells.binary_search_by_key(&(y, x), |&(cx, cy)| (cy, cx)).is_ok()
    }

    /// The changed cells in row-major order.
    pub fn as_slice(&self) -> &[CellPos] {
        &self.cells
    }

    /// Iterate the changed cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.cells.iter().copied()
    }

    /// Absorb another set, keeping order and uniqueness.
    pub fn merge(&mut self, other: ChangeSet) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.cells = other.cells;
            return;
        }
        self.cells.extend(other.cells);
        self.cells.sort_unstable_by_key(|&(x, y)| (y, x));
        self.cells.dedup();
    }
}

impl IntoIterator for ChangeSet {
    type Item = CellPos;
    type IntoIter = std::vec::IntoIter<CellPos>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a CellPos;
    type IntoIter = std::slice::Iter<'a, CellPos>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<C: Classify> BorderField<C> {
    /// Set presence true for every cell within `radius` of the given
    /// footprint, reclassifying the changed cells and their immediate
    /// ring.
    ///
    /// The reach is a Chebyshev box: the footprint grown by `radius` on
    /// every side. The 8-connected disk *is* the Chebyshev ball, so the
    /// box is exactly the cells within `radius` of the footprint under
    /// the same metric the classifier uses; terrain growth and fog reveal
    /// both rely on this shape.
    ///
    /// `radius <= 0` and footprints that miss the grid entirely are
    /// no-ops. Returns the cells whose category changed.
    pub fn include(&mut self, footprint: Footprint, radius: i32) -> ChangeSet {
        if radius <= 0 {
            return ChangeSet::empty();
        }
        let dims = self.dims();
        let Some(area) = footprint.expand(radius as u32).clamped(&dims) else {
            return ChangeSet::empty();
        };
        let mut flipped = Vec::new();
        for (x, y) in area.cells() {
            if self.stage_present(x, y, true) {
                flipped.push((x, y));
            }
        }
        self.reclassify_around(&flipped)
    }

    /// Set presence false for the single cell `(x, y)`, reclassifying it
    /// and its immediate ring.
    ///
    /// Out-of-grid coordinates and already-absent cells are no-ops.
    /// Returns the cells whose category changed.
    pub fn exclude(&mut self, x: i32, y: i32) -> ChangeSet {
        if !self.stage_present(x, y, false) {
            return ChangeSet::empty();
        }
        self.reclassify_around(&[(x, y)])
    }

    /// Recompute categories over the box of `radius` around `(x, y)`
    /// without touching presence. Used after bulk presence loads.
    ///
    /// `radius <= 0` and off-grid regions are no-ops. Returns the cells
    /// whose category changed.
    pub fn reclassify_region(&mut self, x: i32, y: i32, radius: i32) -> ChangeSet {
        if radius <= 0 {
            return ChangeSet::empty();
        }
        let dims = self.dims();
        let Some(area) = Footprint::cell(x, y).expand(radius as u32).clamped(&dims) else {
            return ChangeSet::empty();
        };
        let mut changed = Vec::new();
        for (cx, cy) in area.cells() {
            if self.reclassify_cell(cx, cy) {
                changed.push((cx, cy));
            }
        }
        // Row-major area walk: already sorted and unique.
        ChangeSet { cells: changed }
    }

    /// Recompute every cell's category from current presence.
    ///
    /// The load-time rebuild: classification is never persisted, so this
    /// is how derived state is recovered from raw presence data.
    pub fn reclassify_all(&mut self) -> ChangeSet {
        let dims = self.dims();
        let mut changed = Vec::new();
        for (x, y) in dims.full_footprint().cells() {
            if self.reclassify_cell(x, y) {
                changed.push((x, y));
            }
        }
        ChangeSet { cells: changed }
    }

    /// Reclassify `seeds ∪ neighbours(seeds)` and return the cells whose
    /// category changed. Seeds must be in-grid.
    fn reclassify_around(&mut self, seeds: &[CellPos]) -> ChangeSet {
        if seeds.is_empty() {
            return ChangeSet::empty();
        }
        let dims = self.dims();
        let mut targets = Vec::with_capacity(seeds.len() * 5);
        for &(x, y) in seeds {
            targets.push((x, y));
            for (nx, ny) in dims.neighbours(x, y, C::CONNECTIVITY) {
                targets.push((nx, ny));
            }
        }
        targets.sort_unstable_by_key(|&(x, y)| (y, x));
        targets.dedup();
        let mut changed = Vec::new();
        for (x, y) in targets {
            if self.reclassify_cell(x, y) {
                changed.push((x, y));
            }
        }
        ChangeSet { cells: changed }
    }
}
