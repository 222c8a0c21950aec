//! The [`FogTracker`] and its per-tick update cycle.

use crate::observer::Observer;
use crate::overlay::{CellOverlay, OverlaySprite};
use verge_core::{BorderCategory, BorderClassifier};
use verge_grid::{BorderField, Footprint, GridDims};

/// Which layers a map's fog tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FogMode {
    /// Only the monotone visited layer: unexplored versus explored.
    /// Everything explored counts as currently visible.
    ExploredOnly,
    /// Visited plus a live observed layer recomputed every tick.
    Live,
}

/// Per-cell fog-of-war state for one map, driven by moving observers.
///
/// Owns two 8-connected [`BorderField`]s: `visited` (monotone over the
/// map session) and `observed` (rebuilt by every [`update`](Self::update)
/// call). Queries are pure reads; only `update` and
/// [`reveal`](Self::reveal) mutate.
///
/// All queries treat out-of-grid cells as unvisited and unobserved.
#[derive(Debug)]
pub struct FogTracker {
    mode: FogMode,
    visited: BorderField<BorderClassifier>,
    observed: BorderField<BorderClassifier>,
}

impl FogTracker {
    /// Create a tracker with everything unexplored.
    pub fn new(dims: GridDims, mode: FogMode) -> Self {
        Self {
            mode,
            visited: BorderField::new(dims),
            observed: BorderField::new(dims),
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.visited.dims()
    }

    /// The tracking mode chosen at construction.
    pub fn mode(&self) -> FogMode {
        self.mode
    }

    /// Run one visibility tick over the tracked party's observers.
    ///
    /// In [`FogMode::Live`] the observed layer is reset in a full-grid
    /// pass first — acceptable because this runs once per tick, not per
    /// edit. Each active observer then reveals `fov + 1` around its
    /// footprint on the visited layer and `fov` on the observed layer;
    /// the `include` contract reclassifies the changed cells plus their
    /// ring, so overlay borders stay smooth without further work.
    ///
    /// Observers that are inactive, have `fov <= 0`, or occupy an empty
    /// footprint contribute nothing this tick.
    pub fn update<'a, O, I>(&mut self, observers: I)
    where
        O: Observer + 'a,
        I: IntoIterator<Item = &'a O>,
    {
        if self.mode == FogMode::Live {
            self.observed.clear();
        }
        for observer in observers {
            if !observer.active() {
                continue;
            }
            let fov = observer.fov();
            if fov <= 0 {
                continue;
            }
            let (x, y) = observer.position();
            let (width, height) = observer.footprint();
            let footprint = Footprint::new(x, y, width, height);
            self.visited.include(footprint, fov + 1);
            if self.mode == FogMode::Live {
                self.observed.include(footprint, fov);
            }
        }
    }

    /// Reveal the visited layer around a footprint without an observer —
    /// scripted reveals and editor preview. Ignores the observed layer.
    pub fn reveal(&mut self, footprint: Footprint, radius: i32) {
        self.visited.include(footprint, radius);
    }

    /// Has `(x, y)` ever been revealed? Monotone over the map session.
    pub fn is_visited(&self, x: i32, y: i32) -> bool {
        self.visited.present(x, y)
    }

    /// Is `(x, y)` inside some observer's view right now?
    ///
    /// In [`FogMode::ExploredOnly`] there is no live layer and every
    /// explored cell counts as observed.
    pub fn is_observed(&self, x: i32, y: i32) -> bool {
        match self.mode {
            FogMode::Live => self.observed.present(x, y),
            FogMode::ExploredOnly => self.visited.present(x, y),
        }
    }

    /// Border category of `(x, y)` on the visited layer.
    pub fn visited_category(&self, x: i32, y: i32) -> BorderCategory {
        self.visited.category(x, y)
    }

    /// Border category of `(x, y)` on the observed layer.
    pub fn observed_category(&self, x: i32, y: i32) -> BorderCategory {
        match self.mode {
            FogMode::Live => self.observed.category(x, y),
            FogMode::ExploredOnly => self.visited.category(x, y),
        }
    }

    /// Is an entity occupying `footprint` hidden from the tracked party?
    ///
    /// Hidden only if *no* occupied cell is simultaneously visited and
    /// currently observed — an entity with even one exposed tile is never
    /// hidden, while an entity entirely under unexplored or fogged cells
    /// is.
    pub fn is_hidden(&self, footprint: Footprint) -> bool {
        !footprint
            .cells()
            .any(|(x, y)| self.is_visited(x, y) && self.is_observed(x, y))
    }

    /// The overlay sprites to draw over `(x, y)`:
    ///
    /// - unexplored cells get the full opaque cover;
    /// - explored-but-unobserved cells get the full translucent fog;
    /// - cells on an overlay boundary additionally get rim sprites
    ///   selected by border category, so the cover fades smoothly into
    ///   the clear area;
    /// - fully visible interior cells get nothing.
    pub fn overlay(&self, x: i32, y: i32) -> CellOverlay {
        if !self.is_visited(x, y) {
            return CellOverlay {
                hide: Some(OverlaySprite::Full),
                fog: None,
            };
        }
        let hide = match self.visited_category(x, y) {
            BorderCategory::Center => None,
            category => Some(OverlaySprite::Rim(category)),
        };
        let fog = if self.mode == FogMode::ExploredOnly {
            None
        } else if !self.is_observed(x, y) {
            Some(OverlaySprite::Full)
        } else {
            match self.observed_category(x, y) {
                BorderCategory::Center => None,
                category => Some(OverlaySprite::Rim(category)),
            }
        };
        CellOverlay { hide, fog }
    }
}
