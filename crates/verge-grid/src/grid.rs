//! Grid dimensions and cell footprints.

use crate::error::GridError;
use smallvec::SmallVec;
use verge_core::Connectivity;

/// Dimensions of a tile grid: extent in cells plus the rendering size of
/// one cell.
///
/// The origin `(0, 0)` is the top-left corner; `x` grows eastward and `y`
/// grows southward.
///
/// # Examples
///
/// ```
/// use verge_grid::GridDims;
///
/// let dims = GridDims::new(20, 15, 32).unwrap();
/// assert_eq!(dims.cell_count(), 300);
/// assert!(dims.contains(19, 14));
/// assert!(!dims.contains(20, 0));
/// assert!(!dims.contains(-1, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    cols: u32,
    rows: u32,
    cell_size: u32,
}

impl GridDims {
    /// Maximum extent per axis: coordinates use `i32`, so each axis must
    /// fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create grid dimensions, validating the extent.
    ///
    /// Returns [`GridError::EmptyGrid`] if either extent is 0,
    /// [`GridError::DimensionTooLarge`] if either exceeds
    /// [`Self::MAX_DIM`], and [`GridError::ZeroCellSize`] for a zero cell
    /// size.
    pub fn new(cols: u32, rows: u32, cell_size: u32) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::EmptyGrid);
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        Ok(Self {
            cols,
            rows,
            cell_size,
        })
    }

    /// Extent in cells along the x axis.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Extent in cells along the y axis.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Rendering size of one cell, in pixels or world units.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// Returns `true` if `(x, y)` lies inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.cols as i32 && y < self.rows as i32
    }

    /// Row-major flat index of `(x, y)`, or `None` if outside the grid.
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some((y as usize) * (self.cols as usize) + (x as usize))
        } else {
            None
        }
    }

    /// In-bounds neighbours of `(x, y)` under the given connectivity,
    /// clockwise from north. Cells beyond the grid edge are simply
    /// omitted.
    pub fn neighbours(
        &self,
        x: i32,
        y: i32,
        connectivity: Connectivity,
    ) -> SmallVec<[(i32, i32); 8]> {
        let mut result = SmallVec::new();
        for &dir in connectivity.directions() {
            let (dx, dy) = dir.offset();
            let (nx, ny) = (x + dx, y + dy);
            if self.contains(nx, ny) {
                result.push((nx, ny));
            }
        }
        result
    }

    /// The footprint covering the entire grid.
    pub fn full_footprint(&self) -> Footprint {
        Footprint::new(0, 0, self.cols, self.rows)
    }
}

/// A rectangular area of cells: the shape of an entity's occupancy or the
/// reach of an edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    /// West edge (inclusive).
    pub x: i32,
    /// North edge (inclusive).
    pub y: i32,
    /// Extent in cells along x. A zero extent is an empty footprint.
    pub width: u32,
    /// Extent in cells along y.
    pub height: u32,
}

impl Footprint {
    /// A footprint at `(x, y)` spanning `width × height` cells.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The single-cell footprint at `(x, y)`.
    pub fn cell(x: i32, y: i32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// Returns `true` if the footprint covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if `(x, y)` lies inside the footprint.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        !self.is_empty()
            && x >= self.x
            && y >= self.y
            && x < self.x + self.width as i32
            && y < self.y + self.height as i32
    }

    /// The footprint grown by `radius` cells on every side — the set of
    /// cells within Chebyshev distance `radius` of this footprint.
    pub fn expand(&self, radius: u32) -> Footprint {
        Footprint::new(
            self.x.saturating_sub(radius as i32),
            self.y.saturating_sub(radius as i32),
            self.width.saturating_add(radius * 2),
            self.height.saturating_add(radius * 2),
        )
    }

    /// The intersection with the grid, or `None` if the footprint lies
    /// entirely outside it (or is empty).
    pub fn clamped(&self, dims: &GridDims) -> Option<Footprint> {
        if self.is_empty() {
            return None;
        }
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = (self.x + self.width as i32).min(dims.cols() as i32);
        let y1 = (self.y + self.height as i32).min(dims.rows() as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Footprint::new(x0, y0, (x1 - x0) as u32, (y1 - y0) as u32))
    }

    /// Iterate the covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (x, w) = (self.x, self.width as i32);
        (self.y..self.y + self.height as i32)
            .flat_map(move |y| (x..x + w).map(move |cx| (cx, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_zero_extent_is_rejected() {
        assert_eq!(GridDims::new(0, 5, 16), Err(GridError::EmptyGrid));
        assert_eq!(GridDims::new(5, 0, 16), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            GridDims::new(big, 5, 16),
            Err(GridError::DimensionTooLarge { name: "cols", .. })
        ));
        assert!(matches!(
            GridDims::new(5, big, 16),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
    }

    #[test]
    fn new_rejects_zero_cell_size() {
        assert_eq!(GridDims::new(5, 5, 0), Err(GridError::ZeroCellSize));
    }

    #[test]
    fn index_is_row_major() {
        let dims = GridDims::new(4, 3, 16).unwrap();
        assert_eq!(dims.index(0, 0), Some(0));
        assert_eq!(dims.index(3, 0), Some(3));
        assert_eq!(dims.index(0, 1), Some(4));
        assert_eq!(dims.index(3, 2), Some(11));
        assert_eq!(dims.index(4, 0), None);
        assert_eq!(dims.index(0, -1), None);
    }

    #[test]
    fn neighbours_at_corner_are_trimmed() {
        use verge_core::Connectivity;
        let dims = GridDims::new(5, 5, 16).unwrap();
        assert_eq!(dims.neighbours(0, 0, Connectivity::Four).len(), 2);
        assert_eq!(dims.neighbours(0, 0, Connectivity::Eight).len(), 3);
        assert_eq!(dims.neighbours(2, 2, Connectivity::Eight).len(), 8);
    }

    #[test]
    fn expand_grows_every_side() {
        let fp = Footprint::cell(3, 3).expand(2);
        assert_eq!(fp, Footprint::new(1, 1, 5, 5));
    }

    #[test]
    fn clamp_trims_to_grid() {
        let dims = GridDims::new(4, 4, 16).unwrap();
        let fp = Footprint::new(-2, -2, 5, 5).clamped(&dims).unwrap();
        assert_eq!(fp, Footprint::new(0, 0, 3, 3));
    }

    #[test]
    fn clamp_outside_grid_is_none() {
        let dims = GridDims::new(4, 4, 16).unwrap();
        assert_eq!(Footprint::cell(10, 10).clamped(&dims), None);
        assert_eq!(Footprint::new(0, 0, 0, 3).clamped(&dims), None);
    }

    #[test]
    fn cells_iterates_row_major() {
        let fp = Footprint::new(1, 2, 2, 2);
        let cells: Vec<_> = fp.cells().collect();
        assert_eq!(cells, vec![(1, 2), (2, 2), (1, 3), (2, 3)]);
    }
}
