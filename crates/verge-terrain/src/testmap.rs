//! Test-only map storage and config fixtures shared by the resolver
//! tests.

use crate::access::TileAccess;
use crate::config::{CircuitDecl, GroupDecl, TerrainConfig, TerrainTables, TransitionDecl};
use std::collections::BTreeMap;
use verge_core::{BorderCategory, Category, ChainCategory, CircuitId, GroupId, TileAssignment};
use verge_grid::GridDims;

/// Plain Vec-backed [`TileAccess`] implementation.
pub(crate) struct TestMap {
    dims: GridDims,
    groups: Vec<Option<GroupId>>,
    circuits: Vec<Option<CircuitId>>,
    tiles: Vec<Option<TileAssignment>>,
}

impl TestMap {
    pub fn new(cols: u32, rows: u32) -> Self {
        let dims = GridDims::new(cols, rows, 16).unwrap();
        let count = dims.cell_count();
        Self {
            dims,
            groups: vec![None; count],
            circuits: vec![None; count],
            tiles: vec![None; count],
        }
    }
}

impl TileAccess for TestMap {
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

/// Every border category except `None`, with the category ordinal as its
/// tile index.
fn full_border_tiles() -> BTreeMap<BorderCategory, u16> {
    BorderCategory::ALL
        .iter()
        .filter(|&&c| c != BorderCategory::None)
        .map(|&c| (c, c.ordinal() as u16))
        .collect()
}

fn full_chain_tiles() -> BTreeMap<ChainCategory, u16> {
    ChainCategory::ALL
        .iter()
        .filter(|&&c| c != ChainCategory::None)
        .map(|&c| (c, c.ordinal() as u16))
        .collect()
}

/// Two groups (grass on sheet 0, dirt on sheet 1), a grass→dirt
/// transition on sheet 2, and a road circuit on sheet 3 with a dirt
/// surface override on sheet 4.
pub(crate) fn fixture_tables() -> TerrainTables {
    TerrainConfig {
        groups: vec![
            GroupDecl {
                name: "grass".to_string(),
                sheet: 0,
                tiles: full_border_tiles(),
                blend_tile: 99,
                compatible: vec!["dirt".to_string()],
            },
            GroupDecl {
                name: "dirt".to_string(),
                sheet: 1,
                tiles: full_border_tiles(),
                blend_tile: 99,
                compatible: vec!["grass".to_string()],
            },
        ],
        transitions: vec![TransitionDecl {
            from: "grass".to_string(),
            to: "dirt".to_string(),
            sheet: 2,
            tiles: full_border_tiles(),
        }],
        circuits: vec![CircuitDecl {
            name: "road".to_string(),
            sheet: 3,
            tiles: full_chain_tiles(),
            fallback_tile: 77,
            surfaces: [("dirt".to_string(), 4u16)].into_iter().collect(),
        }],
    }
    .validate()
    .unwrap()
}

/// A group pair with deliberately empty tile tables, for exercising the
/// blend fallback path.
pub(crate) fn sparse_tables() -> TerrainTables {
    TerrainConfig {
        groups: vec![GroupDecl {
            name: "mud".to_string(),
            sheet: 0,
            tiles: BTreeMap::new(),
            blend_tile: 42,
            compatible: Vec::new(),
        }],
        circuits: vec![CircuitDecl {
            name: "fence".to_string(),
            sheet: 1,
            tiles: BTreeMap::new(),
            fallback_tile: 13,
            surfaces: BTreeMap::new(),
        }],
        ..Default::default()
    }
    .validate()
    .unwrap()
}
