//! Snakelle game library crate.
//!
//! A grid-based snake simulation whose playable area is the silhouette of an
//! emoji glyph rather than a plain rectangle. The crate covers mask
//! generation (glyph to boolean occupancy grid), the deterministic game
//! state model and per-tick update engine, the fixed-timestep scheduler, and
//! the level catalog. Rendering and input capture are left to the host.

pub mod app;
pub mod constants;
pub mod error;
pub mod game;
pub mod levels;
pub mod mask;
pub mod scheduler;
