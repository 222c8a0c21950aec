//! End-to-end editing flows: config load, the two-phase paint protocol,
//! fog ticks, and the whole-map fixed point.

use proptest::prelude::*;
use verge_core::{CircuitId, GroupId, SheetId};
use verge_fog::{FixedObserver, FogMode};
use verge_grid::GridDims;
use verge_map::TileMap;
use verge_terrain::TerrainConfig;

const CONFIG: &str = r#"{
    "groups": [
        {
            "name": "grass",
            "sheet": 0,
            "blend_tile": 15,
            "tiles": {
                "center": 0,
                "edge-north": 1, "edge-east": 2, "edge-south": 3, "edge-west": 4,
                "corner-north-west": 5, "corner-north-east": 6,
                "corner-south-west": 7, "corner-south-east": 8,
                "inner-north-west": 9, "inner-north-east": 10,
                "inner-south-west": 11, "inner-south-east": 12,
                "isolated": 13
            },
            "compatible": ["sand"]
        },
        {
            "name": "sand",
            "sheet": 1,
            "blend_tile": 15,
            "tiles": { "center": 0 },
            "compatible": ["grass"]
        }
    ],
    "transitions": [
        {
            "from": "grass",
            "to": "sand",
            "sheet": 2,
            "tiles": {
                "edge-north": 1, "edge-east": 2, "edge-south": 3, "edge-west": 4,
                "corner-north-west": 5, "corner-north-east": 6,
                "corner-south-west": 7, "corner-south-east": 8
            }
        }
    ],
    "circuits": [
        {
            "name": "road",
            "sheet": 3,
            "fallback_tile": 20,
            "tiles": {
                "isolated": 0,
                "end-north": 1, "end-east": 2, "end-south": 3, "end-west": 4,
                "horizontal": 5, "vertical": 6,
                "corner-north-east": 7, "corner-north-west": 8,
                "corner-south-east": 9, "corner-south-west": 10,
                "tee-north": 11, "tee-east": 12, "tee-south": 13, "tee-west": 14,
                "cross": 15
            },
            "surfaces": { "sand": 5 }
        }
    ]
}"#;

const GRASS: GroupId = GroupId(0);
const SAND: GroupId = GroupId(1);
const ROAD: CircuitId = CircuitId(0);

fn editor_map() -> TileMap {
    let _ = env_logger::builder().is_test(true).try_init();
    let tables = TerrainConfig::from_json(CONFIG).unwrap().validate().unwrap();
    TileMap::new(GridDims::new(16, 16, 32).unwrap(), tables, Some(FogMode::Live))
}

/// After any editing sequence, a full resolve sweep must find nothing —
/// the editor relies on this fixed point to know a repaint is complete.
fn assert_settled(map: &mut TileMap) {
    for (x, y) in map.dims().full_footprint().cells() {
        let stale = map.resolve(x, y);
        assert!(stale.is_empty(), "stale cells at ({x},{y}): {stale:?}");
    }
}

#[test]
fn paint_session_reaches_a_fixed_point() {
    let mut map = editor_map();
    map.paint_group(5, 5, GRASS, 3);
    map.paint_group(10, 5, SAND, 2);
    map.paint_group(7, 9, GRASS, 1);
    map.erase_group(5, 5);
    for x in 3..=9 {
        map.paint_circuit(x, 7, ROAD);
    }
    map.erase_circuit(6, 7);
    assert_settled(&mut map);
}

#[test]
fn grass_blends_toward_sand_through_the_transition_sheet() {
    let mut map = editor_map();
    map.paint_group(4, 8, GRASS, 2);
    map.paint_group(9, 8, SAND, 2);

    // Grass column x=6 faces sand column x=7.
    let boundary = map.tile(6, 8).unwrap();
    assert_eq!(boundary.sheet, SheetId(2), "transition sheet");
    // Away from sand, grass uses its own sheet.
    assert_eq!(map.tile(4, 8).unwrap().sheet, SheetId(0));
    assert_settled(&mut map);
}

#[test]
fn roads_swap_surface_sheets_with_the_ground() {
    let mut map = editor_map();
    map.paint_group(5, 5, GRASS, 3);
    for x in 4..=7 {
        map.paint_circuit(x, 5, ROAD);
    }
    assert_eq!(map.tile(5, 5).unwrap().sheet, SheetId(3), "road on grass");

    map.paint_group(5, 5, SAND, 1);
    assert_eq!(map.tile(5, 5).unwrap().sheet, SheetId(5), "road on sand");
    // Shape is unchanged by the surface swap: still a horizontal run.
    assert_eq!(map.tile(5, 5).unwrap().index, 5);
    assert_settled(&mut map);
}

#[test]
fn sparse_sand_table_falls_back_without_blocking_the_painter() {
    let mut map = editor_map();
    // Sand only declares a center tile; its edges land on the blend tile.
    map.paint_group(8, 8, SAND, 2);
    assert_eq!(map.tile(8, 8).unwrap().index, 0, "declared center");
    let edge = map.tile(6, 6).unwrap();
    assert_eq!(edge.index, 15, "undeclared edge category blends");
    assert_settled(&mut map);
}

#[test]
fn fog_tick_tracks_a_patrol() {
    let mut map = editor_map();
    map.paint_group(8, 8, GRASS, 4);

    let mut scout = FixedObserver::at(4, 8, 2);
    map.fog_tick([&scout]);
    let fog = map.fog().unwrap();
    assert!(fog.is_observed(4, 8));
    assert!(fog.is_visited(7, 8) && !fog.is_observed(7, 8));

    scout.x = 12;
    map.fog_tick([&scout]);
    let fog = map.fog().unwrap();
    assert!(fog.is_visited(4, 8), "explored ground stays explored");
    assert!(!fog.is_observed(4, 8));
    assert!(fog.is_observed(12, 8));

    // An entity straddling the fogged and visible areas is not hidden.
    assert!(!fog.is_hidden(verge_grid::Footprint::new(9, 8, 3, 1)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Any interleaving of paints and erasures leaves the whole map at
    /// the resolve fixed point.
    #[test]
    fn random_edit_sessions_settle(
        ops in prop::collection::vec((0u8..4, 0i32..16, 0i32..16, 1i32..3), 1..20),
    ) {
        let mut map = editor_map();
        for (op, x, y, radius) in ops {
            match op {
                0 => {
                    map.paint_group(x, y, GRASS, radius);
                }
                1 => {
                    map.paint_group(x, y, SAND, radius);
                }
                2 => {
                    map.paint_circuit(x, y, ROAD);
                }
                _ => {
                    map.erase_group(x, y);
                }
            }
        }
        for (x, y) in map.dims().full_footprint().cells() {
            prop_assert!(map.resolve(x, y).is_empty(), "stale at ({x},{y})");
        }
    }
}

#[test]
fn malformed_config_fails_before_any_resolution() {
    let text = r#"{
        "groups": [
            { "name": "grass", "sheet": 0, "blend_tile": 0, "compatible": ["bog"] }
        ]
    }"#;
    let err = TerrainConfig::from_json(text).unwrap().validate().unwrap_err();
    assert!(matches!(
        err,
        verge_terrain::ConfigError::UndeclaredGroup { name, .. } if name == "bog"
    ));
}
