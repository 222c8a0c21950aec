//! Fog-of-war tracking for the Verge tile engine.
//!
//! The [`FogTracker`] maintains two parallel border fields per map:
//!
//! - **visited** — cells a tracked observer has ever revealed. Monotone:
//!   once visited, a cell never reverts for the lifetime of the map
//!   session.
//! - **observed** — cells inside some observer's field of view *right
//!   now*. Recomputed every visibility tick.
//!
//! Rendering distinguishes three cell states: unexplored (opaque cover),
//! explored-but-not-currently-visible (translucent fog), and visible
//! (nothing). Border categories on both layers select rim sprites so the
//! overlay edges render smoothly; the category → sprite mapping lives in
//! an explicit [`FogTheme`] table.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod observer;
pub mod overlay;
pub mod tracker;

pub use observer::{FixedObserver, Observer};
pub use overlay::{CellOverlay, FogTheme, OverlaySprite};
pub use tracker::{FogMode, FogTracker};
