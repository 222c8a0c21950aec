//! The save/load data contract.
//!
//! Only raw per-cell state is persisted: group and circuit indices plus
//! the drawable tile numbers. Border categories are never stored — they
//! are fully recoverable from presence data, and loading rebuilds them
//! with a whole-grid reclassification pass. The compact binary codec
//! around this contract lives with the persistence collaborator, not
//! here.

use crate::error::LoadError;
use crate::map::{CellGrid, TileMap};
use serde::{Deserialize, Serialize};
use verge_core::{CircuitId, GroupId, TileAssignment};
use verge_fog::FogMode;
use verge_grid::GridDims;
use verge_terrain::{TerrainTables, TileAccess};

/// One cell's persisted state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCell {
    /// Group index, or `None` for unowned ground.
    pub group: Option<u16>,
    /// Circuit index, or `None`.
    pub circuit: Option<u16>,
    /// The raw tile number on its sheet.
    pub tile: Option<TileAssignment>,
}

/// A whole map's persisted state, cells in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapData {
    /// Extent in cells along x.
    pub cols: u32,
    /// Extent in cells along y.
    pub rows: u32,
    /// Rendering size of one cell.
    pub cell_size: u32,
    /// `cols * rows` cells, row-major.
    pub cells: Vec<RawCell>,
}

impl TileMap {
    /// Snapshot the raw per-cell state for persistence.
    pub fn save(&self) -> MapData {
        let dims = self.dims();
        let cells = dims
            .full_footprint()
            .cells()
            .map(|(x, y)| RawCell {
                group: self.group(x, y).map(|g| g.0),
                circuit: self.circuit(x, y).map(|c| c.0),
                tile: self.tile(x, y),
            })
            .collect();
        MapData {
            cols: dims.cols(),
            rows: dims.rows(),
            cell_size: dims.cell_size(),
            cells,
        }
    }

    /// Reconstruct a map from saved data against the active tables,
    /// rebuilding all derived classification state from scratch.
    ///
    /// Fails fast if the dimensions are degenerate, the cell array length
    /// disagrees with them, or any cell references a group or circuit the
    /// tables do not declare.
    pub fn load(
        data: MapData,
        tables: TerrainTables,
        fog: Option<FogMode>,
    ) -> Result<TileMap, LoadError> {
        let dims = GridDims::new(data.cols, data.rows, data.cell_size)?;
        if data.cells.len() != dims.cell_count() {
            return Err(LoadError::CellCountMismatch {
                expected: dims.cell_count(),
                found: data.cells.len(),
            });
        }
        for cell in &data.cells {
            if let Some(g) = cell.group {
                if (g as usize) >= tables.group_count() {
                    return Err(LoadError::UnknownGroup { index: g });
                }
            }
            if let Some(c) = cell.circuit {
                if (c as usize) >= tables.circuit_count() {
                    return Err(LoadError::UnknownCircuit { index: c });
                }
            }
        }

        let mut cells = CellGrid::new(dims);
        for ((x, y), cell) in dims.full_footprint().cells().zip(&data.cells) {
            cells.set_group(x, y, cell.group.map(GroupId));
            cells.set_circuit(x, y, cell.circuit.map(CircuitId));
            cells.set_tile(x, y, cell.tile);
        }
        log::debug!(
            "map loaded: {}x{} cells, rebuilding derived state",
            data.cols,
            data.rows
        );
        Ok(TileMap::from_parts(cells, tables, fog))
    }
}
