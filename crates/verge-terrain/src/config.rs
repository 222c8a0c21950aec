//! Declarative terrain configuration and its compiled tables.
//!
//! Configuration is loaded once at map-open time, validated eagerly, and
//! read-only afterwards. Declarations reference each other by name; the
//! compiled [`TerrainTables`] reference by dense ID. A declaration naming
//! an undeclared group is a hard [`ConfigError`] — it never reaches a
//! resolver.

use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use verge_core::{BorderCategory, ChainCategory, CircuitId, GroupId, SheetId, TileAssignment, TileTable};

/// One terrain group declaration (grass, dirt, water, ...).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupDecl {
    /// Unique group name.
    pub name: String,
    /// Sheet holding this group's tiles.
    pub sheet: u16,
    /// The group's own edge set: category → tile index on `sheet`.
    /// Entries may be sparse; missing categories fall back to
    /// `blend_tile`.
    #[serde(default)]
    pub tiles: BTreeMap<BorderCategory, u16>,
    /// Neutral blend tile used when no better entry exists.
    pub blend_tile: u16,
    /// Groups this group may sit next to. Advisory metadata for the
    /// editor palette; validated but not consulted by the resolvers.
    #[serde(default)]
    pub compatible: Vec<String>,
}

/// One transition declaration: the blend tiles drawn on `from` cells
/// where they border `to` cells.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionDecl {
    /// Group the tiles are drawn on.
    pub from: String,
    /// The adjacent group being blended toward.
    pub to: String,
    /// Sheet holding the blend tiles.
    pub sheet: u16,
    /// Category → tile index on `sheet`.
    pub tiles: BTreeMap<BorderCategory, u16>,
}

/// One circuit declaration (road, river, wall, ...).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CircuitDecl {
    /// Unique circuit name.
    pub name: String,
    /// Default sheet holding this circuit's tiles.
    pub sheet: u16,
    /// Connectivity category → tile index.
    pub tiles: BTreeMap<ChainCategory, u16>,
    /// Tile index used when a category has no entry.
    pub fallback_tile: u16,
    /// Per-group sheet overrides: a road crossing sand draws from the
    /// sand-surface sheet with the same tile layout.
    #[serde(default)]
    pub surfaces: BTreeMap<String, u16>,
}

/// The whole declarative terrain table set, as parsed from config text.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Declared groups, in palette order.
    #[serde(default)]
    pub groups: Vec<GroupDecl>,
    /// Declared pairwise transitions.
    #[serde(default)]
    pub transitions: Vec<TransitionDecl>,
    /// Declared circuits.
    #[serde(default)]
    pub circuits: Vec<CircuitDecl>,
}

impl TerrainConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Validate the declarations and compile them into dense-ID lookup
    /// tables.
    ///
    /// Fails fast on duplicate names, duplicate transition pairs, and any
    /// reference to an undeclared group — before a single tile resolves
    /// against the tables.
    pub fn validate(self) -> Result<TerrainTables, ConfigError> {
        let mut group_ids: IndexMap<String, GroupId> = IndexMap::new();
        for (i, decl) in self.groups.iter().enumerate() {
            if group_ids
                .insert(decl.name.clone(), GroupId(i as u16))
                .is_some()
            {
                return Err(ConfigError::DuplicateGroup {
                    name: decl.name.clone(),
                });
            }
        }

        let lookup = |name: &str, referenced_by: &str| -> Result<GroupId, ConfigError> {
            group_ids
                .get(name)
                .copied()
                .ok_or_else(|| ConfigError::UndeclaredGroup {
                    name: name.to_string(),
                    referenced_by: referenced_by.to_string(),
                })
        };

        let mut groups = Vec::with_capacity(self.groups.len());
        for decl in &self.groups {
            let sheet = SheetId(decl.sheet);
            let mut compatible = Vec::with_capacity(decl.compatible.len());
            for name in &decl.compatible {
                compatible.push(lookup(name, &format!("group '{}'", decl.name))?);
            }
            groups.push(GroupSpec {
                id: group_ids[&decl.name],
                name: decl.name.clone(),
                sheet,
                tiles: decl
                    .tiles
                    .iter()
                    .map(|(&cat, &index)| (cat, TileAssignment::new(sheet, index)))
                    .collect(),
                blend: TileAssignment::new(sheet, decl.blend_tile),
                compatible,
            });
        }

        let mut transitions: IndexMap<(GroupId, GroupId), TileTable<BorderCategory>> =
            IndexMap::new();
        for decl in &self.transitions {
            let reference = format!("transition '{}' -> '{}'", decl.from, decl.to);
            let from = lookup(&decl.from, &reference)?;
            let to = lookup(&decl.to, &reference)?;
            let sheet = SheetId(decl.sheet);
            let table = decl
                .tiles
                .iter()
                .map(|(&cat, &index)| (cat, TileAssignment::new(sheet, index)))
                .collect();
            if transitions.insert((from, to), table).is_some() {
                return Err(ConfigError::DuplicateTransition {
                    from: decl.from.clone(),
                    to: decl.to.clone(),
                });
            }
        }

        let mut circuit_ids: IndexMap<String, CircuitId> = IndexMap::new();
        let mut circuits = Vec::with_capacity(self.circuits.len());
        for (i, decl) in self.circuits.iter().enumerate() {
            if circuit_ids
                .insert(decl.name.clone(), CircuitId(i as u16))
                .is_some()
            {
                return Err(ConfigError::DuplicateCircuit {
                    name: decl.name.clone(),
                });
            }
            let sheet = SheetId(decl.sheet);
            let mut surfaces = IndexMap::new();
            for (name, &surface_sheet) in &decl.surfaces {
                let group = lookup(name, &format!("circuit '{}'", decl.name))?;
                surfaces.insert(group, SheetId(surface_sheet));
            }
            circuits.push(CircuitSpec {
                id: CircuitId(i as u16),
                name: decl.name.clone(),
                sheet,
                tiles: decl
                    .tiles
                    .iter()
                    .map(|(&cat, &index)| (cat, TileAssignment::new(sheet, index)))
                    .collect(),
                fallback: TileAssignment::new(sheet, decl.fallback_tile),
                surfaces,
            });
        }

        log::debug!(
            "terrain config validated: {} groups, {} transitions, {} circuits",
            groups.len(),
            transitions.len(),
            circuits.len()
        );

        Ok(TerrainTables {
            groups,
            group_ids,
            transitions,
            circuits,
            circuit_ids,
        })
    }
}

/// A validated, compiled group.
#[derive(Clone, Debug)]
pub struct GroupSpec {
    /// Dense ID (declaration order).
    pub id: GroupId,
    /// Declared name.
    pub name: String,
    /// The group's sheet.
    pub sheet: SheetId,
    /// The group's own edge set.
    pub tiles: TileTable<BorderCategory>,
    /// Neutral blend fallback.
    pub blend: TileAssignment,
    /// Declared compatible neighbours.
    pub compatible: Vec<GroupId>,
}

/// A validated, compiled circuit.
#[derive(Clone, Debug)]
pub struct CircuitSpec {
    /// Dense ID (declaration order).
    pub id: CircuitId,
    /// Declared name.
    pub name: String,
    /// Default sheet.
    pub sheet: SheetId,
    /// Connectivity tile set (on the default sheet).
    pub tiles: TileTable<ChainCategory>,
    /// Fallback tile for categories with no entry.
    pub fallback: TileAssignment,
    /// Per-group sheet overrides.
    pub surfaces: IndexMap<GroupId, SheetId>,
}

/// The compiled, read-only lookup tables the resolvers run against.
#[derive(Clone, Debug)]
pub struct TerrainTables {
    groups: Vec<GroupSpec>,
    group_ids: IndexMap<String, GroupId>,
    transitions: IndexMap<(GroupId, GroupId), TileTable<BorderCategory>>,
    circuits: Vec<CircuitSpec>,
    circuit_ids: IndexMap<String, CircuitId>,
}

impl TerrainTables {
    /// Number of declared groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of declared circuits.
    pub fn circuit_count(&self) -> usize {
        self.circuits.len()
    }

    /// Look up a group by ID.
    pub fn group(&self, id: GroupId) -> Option<&GroupSpec> {
        self.groups.get(id.0 as usize)
    }

    /// Look up a group by name.
    pub fn group_named(&self, name: &str) -> Option<&GroupSpec> {
        self.group_ids.get(name).and_then(|&id| self.group(id))
    }

    /// Iterate groups in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = &GroupSpec> {
        self.groups.iter()
    }

    /// Look up a circuit by ID.
    pub fn circuit(&self, id: CircuitId) -> Option<&CircuitSpec> {
        self.circuits.get(id.0 as usize)
    }

    /// Look up a circuit by name.
    pub fn circuit_named(&self, name: &str) -> Option<&CircuitSpec> {
        self.circuit_ids.get(name).and_then(|&id| self.circuit(id))
    }

    /// Iterate circuits in declaration order.
    pub fn circuits(&self) -> impl Iterator<Item = &CircuitSpec> {
        self.circuits.iter()
    }

    /// The blend table drawn on `from` cells bordering `to` cells, if
    /// declared.
    pub fn transition(&self, from: GroupId, to: GroupId) -> Option<&TileTable<BorderCategory>> {
        self.transitions.get(&(from, to))
    }
}
