//! This module contains all the constants used in the simulation.

use std::time::Duration;

use glam::UVec2;

/// Time between simulation ticks (5 ticks per second).
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);

/// The default board size, in cells, when no level is supplied.
pub const DEFAULT_BOARD_SIZE: UVec2 = UVec2::new(16, 24);

/// Number of segments the snake is seeded with. Long enough that a snake can
/// collide with itself without any growth mechanic.
pub const INITIAL_SNAKE_LENGTH: usize = 5;

/// Side length of the intermediate canvas a glyph is rasterized into before
/// sampling. Fixed regardless of the final grid size so sampling always has
/// enough source detail.
pub const DEFAULT_CANVAS_SIZE: u32 = 256;

/// Font size relative to the canvas when rasterizing a glyph.
pub const GLYPH_SCALE: f32 = 0.8;

/// Alpha value at or above which a source pixel counts as filled.
pub const ALPHA_THRESHOLD: u8 = 128;

/// A grid cell is filled when strictly more than this fraction of its source
/// pixels are filled. Chosen empirically: high enough to suppress
/// anti-aliasing noise at glyph edges, low enough to preserve shape detail.
pub const CELL_FILL_THRESHOLD: f32 = 0.3;

/// Smallest accepted canvas size for glyph rasterization.
pub const MIN_CANVAS_SIZE: u32 = 16;
/// Largest accepted canvas size for glyph rasterization.
pub const MAX_CANVAS_SIZE: u32 = 2048;

/// Smallest accepted mask grid dimension.
pub const MIN_GRID_SIZE: u32 = 1;
/// Largest accepted mask grid dimension.
pub const MAX_GRID_SIZE: u32 = 256;
