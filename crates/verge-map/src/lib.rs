//! The Verge tile map.
//!
//! [`TileMap`] is the concrete map value the editor and the game tick
//! drive. Its capabilities are typed extensions attached at construction
//! time — the terrain transition resolver, the circuit resolver, and
//! optionally a fog tracker — resolved statically, never discovered at
//! runtime.
//!
//! Editing follows the two-phase protocol: a terrain edit resolves
//! terrain tiles first, then explicitly re-resolves the circuit cells in
//! the edit's reach (and an erased circuit cell hands its tile back to
//! the terrain resolver). Neither resolver ever cascades into the other
//! on its own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod map;
pub mod persist;

pub use error::LoadError;
pub use map::TileMap;
pub use persist::{MapData, RawCell};
