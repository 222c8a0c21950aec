//! Terrain auto-tiling for the Verge tile engine.
//!
//! Two resolvers share the border-field machinery from `verge-grid`:
//!
//! - [`TransitionResolver`] blends adjacent terrain groups through
//!   transition tiles, classifying each group's membership under the
//!   8-connected neighbourhood;
//! - [`CircuitResolver`] shapes linear chains (roads, rivers, walls)
//!   under the 4-connected neighbourhood.
//!
//! Both write tiles through the [`TileAccess`] trait — the seam to the
//! map value — and both are idempotent: resolving an already-consistent
//! region returns an empty [`ChangeSet`](verge_grid::ChangeSet).
//!
//! The resolvers never cascade into each other. Painting terrain next to
//! a road does not silently rewrite the road: the caller runs the
//! explicit second phase (re-resolving adjacent circuit cells) after a
//! terrain resolve. This keeps the blast radius of any edit bounded and
//! editing latency predictable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod access;
pub mod circuit;
pub mod config;
pub mod error;
pub mod transition;

#[cfg(test)]
pub(crate) mod testmap;

pub use access::TileAccess;
pub use circuit::CircuitResolver;
pub use config::{
    CircuitDecl, CircuitSpec, GroupDecl, GroupSpec, TerrainConfig, TerrainTables, TransitionDecl,
};
pub use error::ConfigError;
pub use transition::TransitionResolver;
