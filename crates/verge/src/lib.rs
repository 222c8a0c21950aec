//! Verge: a 2D tile-engine core built around an incremental grid
//! border-state automaton.
//!
//! Every cell of a map grid is classified into a small fixed set of
//! border categories describing how the cell's boundary relates to its
//! neighbourhood. Classification updates incrementally — the cost of an
//! edit is proportional to its footprint, never to the grid — and three
//! production features ride on it: terrain auto-tiling across group
//! boundaries, linear circuits (roads, rivers, walls), and fog-of-war.
//!
//! This is the top-level facade crate re-exporting the public API of all
//! Verge sub-crates; adding `verge` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use verge::prelude::*;
//!
//! // Declare one terrain group and validate the tables.
//! let tables = TerrainConfig::from_json(r#"{
//!     "groups": [
//!         { "name": "grass", "sheet": 0, "blend_tile": 9,
//!           "tiles": { "center": 0, "edge-north": 1 } }
//!     ]
//! }"#).unwrap().validate().unwrap();
//!
//! // A 16×16 map with live fog-of-war.
//! let dims = GridDims::new(16, 16, 32).unwrap();
//! let mut map = TileMap::new(dims, tables, Some(FogMode::Live));
//!
//! // Paint, then tick visibility for one observer.
//! let updated = map.paint_group(5, 5, GroupId(0), 2);
//! assert!(!updated.is_empty());
//! map.fog_tick([&FixedObserver::at(5, 5, 3)]);
//! assert!(map.fog().unwrap().is_observed(5, 5));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `verge-core` | IDs, neighbour masks, categories, classifiers |
//! | [`grid`] | `verge-grid` | Presence layers, border fields, incremental updates |
//! | [`terrain`] | `verge-terrain` | Config tables, transition and circuit resolvers |
//! | [`fog`] | `verge-fog` | Fog-of-war tracking and overlay themes |
//! | [`map`] | `verge-map` | The tile map value and persistence contract |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: IDs, masks, categories, and classifiers (`verge-core`).
pub use verge_core as types;

/// Grid storage and the incremental updater (`verge-grid`).
pub use verge_grid as grid;

/// Terrain configuration and resolvers (`verge-terrain`).
pub use verge_terrain as terrain;

/// Fog-of-war tracking (`verge-fog`).
pub use verge_fog as fog;

/// The tile map value and save/load contract (`verge-map`).
pub use verge_map as map;

/// The most commonly used types, re-exported flat.
pub mod prelude {
    pub use verge_core::{
        BorderCategory, ChainCategory, CircuitId, GroupId, SheetId, TileAssignment,
    };
    pub use verge_fog::{CellOverlay, FixedObserver, FogMode, FogTheme, FogTracker, Observer};
    pub use verge_grid::{BorderField, ChangeSet, Footprint, GridDims};
    pub use verge_map::{MapData, TileMap};
    pub use verge_terrain::{
        CircuitResolver, ConfigError, TerrainConfig, TerrainTables, TileAccess,
        TransitionResolver,
    };
}
