//! Level records and the built-in level catalog.
//!
//! A level is a board shape: dimensions, an optional silhouette mask and the
//! number of cells that must be visited to win. Catalog entries are
//! precomputed as raw string-row boards so gameplay does not depend on font
//! availability at runtime.

use std::sync::{Arc, LazyLock};

use glam::IVec2;

use crate::constants::DEFAULT_BOARD_SIZE;
use crate::error::ParseError;
use crate::mask::CellGrid;

/// Descriptive metadata for a catalog level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelMetadata {
    /// The emoji the mask was sampled from.
    pub emoji: String,
    /// Display name for the level.
    pub name: String,
    /// Difficulty rating (1-5).
    pub difficulty: u8,
    /// Optional description.
    pub description: Option<String>,
}

/// A board definition.
///
/// When `mask` is present, `target_cells` holds the count of `true` mask
/// cells, set once at construction and never recomputed. Without a mask the
/// level is an open rectangle and the win condition is disabled.
#[derive(Debug, Clone)]
pub struct Level {
    pub width: u32,
    pub height: u32,
    /// `true` = traversable, `false` = outside the silhouette.
    pub mask: Option<Arc<CellGrid>>,
    pub target_cells: Option<u32>,
    pub metadata: Option<LevelMetadata>,
}

impl Level {
    /// An open rectangular board with no mask; the win condition is disabled.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mask: None,
            target_cells: None,
            metadata: None,
        }
    }

    /// Builds a level from a mask, deriving dimensions and the target cell
    /// count from it.
    pub fn from_mask(mask: CellGrid, metadata: Option<LevelMetadata>) -> Self {
        let target_cells = mask.count();
        Self {
            width: mask.width(),
            height: mask.height(),
            mask: Some(Arc::new(mask)),
            target_cells: Some(target_cells),
            metadata,
        }
    }

    /// Parses a raw string-row board into a level.
    ///
    /// `#` marks a traversable mask cell, `.` and space mark cells outside
    /// the silhouette. All rows must have the same length.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty, a row length differs from the
    /// first row, or an unknown character is encountered.
    pub fn from_rows(rows: &[&str], metadata: Option<LevelMetadata>) -> Result<Self, ParseError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut mask = CellGrid::new(width as u32, height as u32);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, character) in row.chars().enumerate() {
                let filled = match character {
                    '#' => true,
                    '.' | ' ' => false,
                    _ => return Err(ParseError::UnknownCharacter(character)),
                };
                mask.set(x as u32, y as u32, filled);
            }
        }

        Ok(Self::from_mask(mask, metadata))
    }

    /// Whether a position lies within the board boundaries.
    pub fn contains(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Whether a position can be occupied by the snake: in bounds and, when
    /// a mask exists, part of the silhouette.
    pub fn is_traversable(&self, pos: IVec2) -> bool {
        if !self.contains(pos) {
            return false;
        }
        match &self.mask {
            Some(mask) => mask.get(pos.x as u32, pos.y as u32),
            None => true,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::open(DEFAULT_BOARD_SIZE.x, DEFAULT_BOARD_SIZE.y)
    }
}

/// The raw 16x24 board for the red apple (🍎), sampled once from the glyph
/// and frozen here for consistent gameplay.
pub const APPLE_BOARD: [&str; 24] = [
    ".........#......",
    "........##......",
    "........##......",
    "........#.......",
    ".......##.......",
    "....########....",
    "...##########...",
    "..############..",
    ".##############.",
    ".##############.",
    "################",
    "################",
    "################",
    "################",
    "################",
    "################",
    ".##############.",
    ".##############.",
    "..############..",
    "..############..",
    "...##########...",
    "....########....",
    ".....######.....",
    "......####......",
];

/// All built-in levels, in play order.
pub static LEVELS: LazyLock<Vec<Level>> = LazyLock::new(|| {
    let apple = Level::from_rows(
        &APPLE_BOARD,
        Some(LevelMetadata {
            emoji: "🍎".to_string(),
            name: "Red Apple".to_string(),
            difficulty: 1,
            description: Some("A classic red apple - perfect for beginners!".to_string()),
        }),
    )
    .expect("built-in apple board is valid");

    vec![apple]
});

/// Gets a level by its 1-based level number. Cheap: the mask is shared, not
/// copied.
pub fn get_level(level_number: usize) -> Option<Level> {
    level_number.checked_sub(1).and_then(|index| LEVELS.get(index)).cloned()
}

/// The total number of built-in levels.
pub fn level_count() -> usize {
    LEVELS.len()
}
