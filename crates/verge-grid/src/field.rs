//! The [`BorderField`]: a presence layer plus its derived categories.

use crate::grid::GridDims;
use crate::presence::PresenceLayer;
use verge_core::{Category, Classify, NeighbourMask};

/// A 2D grid of presence flags together with the border category derived
/// from each cell's neighbourhood, kept consistent by the updater
/// operations in [`crate::updater`].
///
/// The classifier `C` is a compile-time choice: terrain and fog fields use
/// the 8-connected [`BorderClassifier`](verge_core::BorderClassifier),
/// circuit fields the 4-connected
/// [`ChainClassifier`](verge_core::ChainClassifier).
///
/// Coordinates outside the grid read as absent with the absent category;
/// no operation errors at the map edge.
#[derive(Clone, Debug)]
pub struct BorderField<C: Classify> {
    dims: GridDims,
    presence: PresenceLayer,
    categories: Vec<C::Category>,
}

impl<C: Classify> BorderField<C> {
    /// Create a field with every cell absent.
    pub fn new(dims: GridDims) -> Self {
        let count = dims.cell_count();
        Self {
            dims,
            presence: PresenceLayer::new(count),
            categories: vec![C::Category::ABSENT; count],
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Presence of `(x, y)`; absent outside the grid.
    pub fn present(&self, x: i32, y: i32) -> bool {
        match self.dims.index(x, y) {
            Some(i) => self.presence.get(i),
            None => false,
        }
    }

    /// Stored category of `(x, y)`; the absent category outside the grid.
    pub fn category(&self, x: i32, y: i32) -> C::Category {
        match self.dims.index(x, y) {
            Some(i) => self.categories[i],
            None => C::Category::ABSENT,
        }
    }

    /// Number of present cells.
    pub fn present_count(&self) -> usize {
        self.presence.count()
    }

    /// The presence pattern around `(x, y)` under the classifier's
    /// connectivity. Out-of-grid neighbours contribute clear bits.
    pub fn mask_at(&self, x: i32, y: i32) -> NeighbourMask {
        let mut mask = NeighbourMask::EMPTY;
        for &dir in C::CONNECTIVITY.directions() {
            let (dx, dy) = dir.offset();
            if self.present(x + dx, y + dy) {
                mask = mask.with(dir);
            }
        }
        mask
    }

    /// What `(x, y)` would classify as right now, ignoring the stored
    /// category.
    pub fn classify_at(&self, x: i32, y: i32) -> C::Category {
        C::classify(self.present(x, y), self.mask_at(x, y))
    }

    /// Set presence without reclassifying, returning `true` if the stored
    /// flag changed. Out-of-grid writes are ignored.
    ///
    /// This is the bulk-load path: stage raw presence for every cell,
    /// then rebuild the derived state once with
    /// [`reclassify_all`](Self::reclassify_all). Between the staging and
    /// the rebuild, stored categories are stale — do not interleave reads.
    pub fn stage_present(&mut self, x: i32, y: i32, present: bool) -> bool {
        match self.dims.index(x, y) {
            Some(i) => self.presence.set(i, present),
            None => false,
        }
    }

    /// Recompute the stored category of one in-grid cell, returning
    /// `true` if it changed.
    pub(crate) fn reclassify_cell(&mut self, x: i32, y: i32) -> bool {
        let Some(i) = self.dims.index(x, y) else {
            return false;
        };
        let fresh = self.classify_at(x, y);
        if self.categories[i] == fresh {
            false
        } else {
            self.categories[i] = fresh;
            true
        }
    }

    /// Reset every cell to absent with the absent category.
    ///
    /// A full-grid pass — meant for the fog tracker's once-per-tick
    /// observed reset, not for per-edit use.
    pub fn clear(&mut self) {
        self.presence.clear();
        self.categories.fill(C::Category::ABSENT);
    }
}
