//! Grid storage for the Verge tile engine.
//!
//! The central type is [`BorderField`]: a per-layer presence grid plus the
//! border categories derived from it. Presence is edited through the
//! incremental updater operations ([`BorderField::include`],
//! [`BorderField::exclude`]) which reclassify only the cells whose
//! neighbourhood actually changed — the cost of an edit is proportional to
//! its footprint, never to the grid size.
//!
//! Out-of-grid coordinates read as absent and are ignored on write; map
//! edges need no special-casing anywhere above this crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid;
pub mod presence;
pub mod updater;

pub use error::GridError;
pub use field::BorderField;
pub use grid::{Footprint, GridDims};
pub use presence::PresenceLayer;
pub use updater::ChangeSet;
