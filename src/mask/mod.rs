//! Mask generation: converting an emoji glyph into a boolean occupancy grid.
//!
//! A glyph is rasterized into a high-resolution RGBA buffer (the alpha
//! channel is the signal; color is irrelevant) and then downsampled by
//! coverage thresholding into a [`CellGrid`]. The rasterization backend is
//! isolated behind the [`GlyphRasterizer`] seam so the sampling algorithm
//! stays testable without any real font or drawing surface.

pub mod raster;

use std::fmt;

use crate::constants::{
    ALPHA_THRESHOLD, CELL_FILL_THRESHOLD, DEFAULT_CANVAS_SIZE, MAX_CANVAS_SIZE, MAX_GRID_SIZE, MIN_CANVAS_SIZE, MIN_GRID_SIZE,
};
use crate::error::{GameResult, MaskError};

pub use raster::{FontRasterizer, GlyphRasterizer, PixelBuffer};

/// A rectangular boolean grid, row-major.
///
/// Used both for emoji masks (`true` = cell is part of the shape) and for
/// the visited grid tracked during play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl CellGrid {
    /// Creates a grid of the given dimensions with every cell `false`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[(y * self.width + x) as usize]
    }

    /// Sets the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[(y * self.width + x) as usize] = value;
    }

    /// Counts the `true` cells in the grid. O(width * height).
    pub fn count(&self) -> u32 {
        self.cells.iter().filter(|&&cell| cell).count() as u32
    }
}

/// Renders the grid with `█` for filled cells and `·` for empty ones.
impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(if self.get(x, y) { "█" } else { "·" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Rasterizes a glyph into an RGBA pixel buffer after validating the canvas
/// size against `[MIN_CANVAS_SIZE, MAX_CANVAS_SIZE]`.
pub fn render_glyph_to_buffer(rasterizer: &dyn GlyphRasterizer, glyph: &str, size: u32) -> GameResult<PixelBuffer> {
    if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&size) {
        return Err(MaskError::CanvasSizeOutOfRange(size).into());
    }
    Ok(rasterizer.rasterize(glyph, size)?)
}

/// Downsamples a pixel buffer into a boolean mask grid.
///
/// Each destination cell covers a source-pixel rectangle computed by linear
/// scaling with floored bounds; adjacent cells together cover the source
/// exactly once up to floor rounding, so an off-by-one-pixel sliver at the
/// edges is accepted behavior. A cell is `true` iff strictly more than
/// [`CELL_FILL_THRESHOLD`] of its pixels have an alpha of at least
/// `threshold` (pass [`ALPHA_THRESHOLD`] for the standard cutoff).
pub fn sample_to_mask(buffer: &PixelBuffer, grid_width: u32, grid_height: u32, threshold: u8) -> Result<CellGrid, MaskError> {
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_width) {
        return Err(MaskError::GridWidthOutOfRange(grid_width));
    }
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_height) {
        return Err(MaskError::GridHeightOutOfRange(grid_height));
    }

    let mut mask = CellGrid::new(grid_width, grid_height);

    // Size of each destination cell in source pixels.
    let cell_width = buffer.width() as f32 / grid_width as f32;
    let cell_height = buffer.height() as f32 / grid_height as f32;

    for grid_y in 0..grid_height {
        for grid_x in 0..grid_width {
            let start_x = (grid_x as f32 * cell_width).floor() as u32;
            let start_y = (grid_y as f32 * cell_height).floor() as u32;
            let end_x = ((grid_x + 1) as f32 * cell_width).floor() as u32;
            let end_y = ((grid_y + 1) as f32 * cell_height).floor() as u32;

            let mut filled = 0u32;
            let mut total = 0u32;
            for y in start_y..end_y.min(buffer.height()) {
                for x in start_x..end_x.min(buffer.width()) {
                    if buffer.alpha(x, y) >= threshold {
                        filled += 1;
                    }
                    total += 1;
                }
            }

            let fill_ratio = if total > 0 { filled as f32 / total as f32 } else { 0.0 };
            mask.set(grid_x, grid_y, fill_ratio > CELL_FILL_THRESHOLD);
        }
    }

    Ok(mask)
}

/// Generates a mask for a glyph using the given rasterization backend.
///
/// The glyph is always rendered at the fixed [`DEFAULT_CANVAS_SIZE`]
/// intermediate resolution regardless of the final grid size.
pub fn generate_mask_with(rasterizer: &dyn GlyphRasterizer, glyph: &str, grid_width: u32, grid_height: u32) -> GameResult<CellGrid> {
    let buffer = render_glyph_to_buffer(rasterizer, glyph, DEFAULT_CANVAS_SIZE)?;
    Ok(sample_to_mask(&buffer, grid_width, grid_height, ALPHA_THRESHOLD)?)
}

/// Generates a mask for a glyph using a system font discovered at call time.
pub fn generate_mask(glyph: &str, grid_width: u32, grid_height: u32) -> GameResult<CellGrid> {
    let rasterizer = FontRasterizer::discover()?;
    generate_mask_with(&rasterizer, glyph, grid_width, grid_height)
}
