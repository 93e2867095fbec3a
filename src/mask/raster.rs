//! Glyph rasterization backends for mask generation.
//!
//! The sampling algorithm only needs an alpha buffer, so the rasterizer is a
//! narrow trait: any host capable of rasterizing text into RGBA pixels can
//! feed it. The production backend loads a system font with `ttf-parser` and
//! rasterizes on the CPU; color-emoji fonts embed PNG bitmaps per glyph,
//! other fonts are filled from their outlines.

use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use image::ImageFormat;
use tracing::debug;
use ttf_parser::{Face, GlyphId, RasterGlyphImage, RasterImageFormat};

use crate::constants::GLYPH_SCALE;
use crate::error::FontError;

/// A raw RGBA pixel buffer. The alpha channel carries the glyph coverage
/// signal; the color channels are irrelevant downstream.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha value of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.data[((y * self.width + x) * 4 + 3) as usize]
    }

    /// Sets the alpha value of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn set_alpha(&mut self, x: u32, y: u32, alpha: u8) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.data[((y * self.width + x) * 4 + 3) as usize] = alpha;
    }

    /// The raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Backend capable of rasterizing a glyph into a square pixel buffer.
///
/// Implementations draw the glyph centered at [`GLYPH_SCALE`] of the canvas
/// size. The canvas size has already been validated by the caller.
pub trait GlyphRasterizer {
    fn rasterize(&self, glyph: &str, canvas_size: u32) -> Result<PixelBuffer, FontError>;
}

/// Candidate font files, tried in order. Emoji-capable fonts first, plain
/// sans-serif faces as the tail of the chain.
#[cfg(target_os = "linux")]
const FONT_SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoColorEmoji.ttf",
    "/usr/share/fonts/noto/NotoColorEmoji.ttf",
    "/usr/share/fonts/google-noto-emoji/NotoColorEmoji.ttf",
    "/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

#[cfg(target_os = "macos")]
const FONT_SEARCH_PATHS: &[&str] = &[
    "/System/Library/Fonts/Apple Color Emoji.ttc",
    "/System/Library/Fonts/Supplemental/Apple Color Emoji.ttc",
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
const FONT_SEARCH_PATHS: &[&str] = &[
    "C:\\Windows\\Fonts\\seguiemj.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// CPU glyph rasterizer backed by a single font file.
pub struct FontRasterizer {
    font_data: Vec<u8>,
    face_index: u32,
}

impl FontRasterizer {
    /// Finds the first usable font in the system search paths.
    pub fn discover() -> Result<Self, FontError> {
        for path in FONT_SEARCH_PATHS {
            if !Path::new(path).exists() {
                continue;
            }
            let Ok(font_data) = fs::read(path) else {
                continue;
            };
            if Face::parse(&font_data, 0).is_ok() {
                debug!(path, "Loaded font for glyph rasterization");
                return Ok(Self { font_data, face_index: 0 });
            }
        }
        Err(FontError::NoFontFound)
    }

    /// Creates a rasterizer from font bytes already in memory.
    pub fn from_bytes(font_data: Vec<u8>, face_index: u32) -> Result<Self, FontError> {
        Face::parse(&font_data, face_index).map_err(|e| FontError::FaceParse(e.to_string()))?;
        Ok(Self { font_data, face_index })
    }

    // `Face` borrows the font bytes, so it is re-parsed per call rather than
    // stored alongside them.
    fn face(&self) -> Result<Face<'_>, FontError> {
        Face::parse(&self.font_data, self.face_index).map_err(|e| FontError::FaceParse(e.to_string()))
    }

    fn blit_raster_image(glyph_image: &RasterGlyphImage<'_>, font_size: f32, buffer: &mut PixelBuffer) -> Result<(), FontError> {
        if glyph_image.format != RasterImageFormat::PNG {
            return Err(FontError::ImageDecode(format!("unsupported raster format {:?}", glyph_image.format)));
        }

        let decoded = image::load_from_memory_with_format(glyph_image.data, ImageFormat::Png)
            .map_err(|e| FontError::ImageDecode(e.to_string()))?
            .to_rgba8();

        let longest = decoded.width().max(decoded.height()).max(1);
        let scale = font_size / longest as f32;
        let target_width = ((decoded.width() as f32 * scale).round() as u32).max(1);
        let target_height = ((decoded.height() as f32 * scale).round() as u32).max(1);
        let scaled = image::imageops::resize(&decoded, target_width, target_height, FilterType::Triangle);

        let offset_x = buffer.width().saturating_sub(target_width) / 2;
        let offset_y = buffer.height().saturating_sub(target_height) / 2;
        for (x, y, pixel) in scaled.enumerate_pixels() {
            let dest_x = offset_x + x;
            let dest_y = offset_y + y;
            if dest_x < buffer.width() && dest_y < buffer.height() {
                buffer.set_alpha(dest_x, dest_y, pixel.0[3]);
            }
        }
        Ok(())
    }

    fn fill_outline(face: &Face<'_>, glyph_id: GlyphId, font_size: f32, buffer: &mut PixelBuffer) {
        let mut sink = OutlineSink::default();
        let Some(bbox) = face.outline_glyph(glyph_id, &mut sink) else {
            // No outline (e.g. whitespace); the buffer stays transparent.
            return;
        };
        sink.finish();

        let scale = font_size / face.units_per_em() as f32;
        let center_x = (bbox.x_min as f32 + bbox.x_max as f32) / 2.0 * scale;
        let center_y = (bbox.y_min as f32 + bbox.y_max as f32) / 2.0 * scale;
        let half = buffer.width() as f32 / 2.0;

        // Font units are y-up; the buffer is y-down. Center the glyph's
        // bounding box on the canvas.
        for contour in &mut sink.contours {
            for point in contour.iter_mut() {
                point.0 = point.0 * scale - center_x + half;
                point.1 = half + center_y - point.1 * scale;
            }
        }

        scanline_fill(&sink.contours, buffer);
    }
}

impl GlyphRasterizer for FontRasterizer {
    fn rasterize(&self, glyph: &str, canvas_size: u32) -> Result<PixelBuffer, FontError> {
        let face = self.face()?;
        let ch = glyph.chars().next().ok_or(FontError::EmptyGlyph)?;
        let glyph_id = face.glyph_index(ch).ok_or(FontError::GlyphNotFound(ch))?;

        let mut buffer = PixelBuffer::new(canvas_size, canvas_size);
        let font_size = canvas_size as f32 * GLYPH_SCALE;

        if let Some(glyph_image) = face.glyph_raster_image(glyph_id, u16::MAX) {
            Self::blit_raster_image(&glyph_image, font_size, &mut buffer)?;
        } else {
            Self::fill_outline(&face, glyph_id, font_size, &mut buffer);
        }

        Ok(buffer)
    }
}

/// Collects glyph contours as flattened polylines.
#[derive(Default)]
struct OutlineSink {
    contours: Vec<Vec<(f32, f32)>>,
    current: Vec<(f32, f32)>,
}

impl OutlineSink {
    const QUAD_STEPS: u32 = 8;
    const CUBIC_STEPS: u32 = 16;

    fn finish(&mut self) {
        if self.current.len() > 1 {
            let contour = std::mem::take(&mut self.current);
            self.contours.push(contour);
        } else {
            self.current.clear();
        }
    }

    fn last(&self) -> (f32, f32) {
        *self.current.last().unwrap_or(&(0.0, 0.0))
    }
}

impl ttf_parser::OutlineBuilder for OutlineSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.finish();
        self.current.push((x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.current.push((x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x0, y0) = self.last();
        for step in 1..=Self::QUAD_STEPS {
            let t = step as f32 / Self::QUAD_STEPS as f32;
            let mt = 1.0 - t;
            let px = mt * mt * x0 + 2.0 * mt * t * x1 + t * t * x;
            let py = mt * mt * y0 + 2.0 * mt * t * y1 + t * t * y;
            self.current.push((px, py));
        }
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x0, y0) = self.last();
        for step in 1..=Self::CUBIC_STEPS {
            let t = step as f32 / Self::CUBIC_STEPS as f32;
            let mt = 1.0 - t;
            let px = mt * mt * mt * x0 + 3.0 * mt * mt * t * x1 + 3.0 * mt * t * t * x2 + t * t * t * x;
            let py = mt * mt * mt * y0 + 3.0 * mt * mt * t * y1 + 3.0 * mt * t * t * y2 + t * t * t * y;
            self.current.push((px, py));
        }
    }

    fn close(&mut self) {
        self.finish();
    }
}

/// Fills closed contours into the buffer's alpha channel using the nonzero
/// winding rule, one scanline at a time.
fn scanline_fill(contours: &[Vec<(f32, f32)>], buffer: &mut PixelBuffer) {
    let width = buffer.width();
    let mut crossings: Vec<(f32, i32)> = Vec::new();

    for y in 0..buffer.height() {
        let sample_y = y as f32 + 0.5;
        crossings.clear();

        for contour in contours {
            let len = contour.len();
            for i in 0..len {
                let (x0, y0) = contour[i];
                let (x1, y1) = contour[(i + 1) % len];
                if y0 == y1 {
                    continue;
                }
                let (min_y, max_y) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
                if sample_y < min_y || sample_y >= max_y {
                    continue;
                }
                let t = (sample_y - y0) / (y1 - y0);
                let x = x0 + t * (x1 - x0);
                crossings.push((x, if y1 > y0 { 1 } else { -1 }));
            }
        }

        crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

        // The interval between consecutive crossings is inside the shape
        // whenever the accumulated winding number is nonzero.
        let mut winding = 0;
        let mut previous_x = 0.0f32;
        for &(x, direction) in crossings.iter() {
            if winding != 0 {
                let first = (previous_x - 0.5).ceil().max(0.0) as u32;
                let last = (x - 0.5).ceil().max(0.0) as u32;
                for pixel_x in first..last.min(width) {
                    buffer.set_alpha(pixel_x, y, 255);
                }
            }
            winding += direction;
            previous_x = x;
        }
    }
}
