//! Centralized error types for the simulation.
//!
//! This module defines all error types used throughout the crate, providing a
//! consistent error handling approach. The update engine and state model
//! never return errors; their failure outcomes are expressed as status
//! transitions instead.

use std::io;

use crate::constants::{MAX_CANVAS_SIZE, MAX_GRID_SIZE, MIN_CANVAS_SIZE, MIN_GRID_SIZE};

/// Main error type for the simulation.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Mask error: {0}")]
    Mask(#[from] MaskError),

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Level parsing error: {0}")]
    LevelParse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Validation errors for mask generation.
///
/// These are synchronous and non-recoverable for the failing call. Callers
/// building a level catalog are expected to use statically valid inputs;
/// validation exists to catch misuse.
#[derive(thiserror::Error, Debug)]
pub enum MaskError {
    #[error("Canvas size must be between {MIN_CANVAS_SIZE} and {MAX_CANVAS_SIZE}, got {0}")]
    CanvasSizeOutOfRange(u32),

    #[error("Grid width must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}, got {0}")]
    GridWidthOutOfRange(u32),

    #[error("Grid height must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}, got {0}")]
    GridHeightOutOfRange(u32),
}

/// Errors raised while rasterizing a glyph to a pixel buffer.
///
/// Failing to acquire a usable font face is fatal to mask generation for that
/// call; there is no retry.
#[derive(thiserror::Error, Debug)]
pub enum FontError {
    #[error("No usable font found in the system search paths")]
    NoFontFound,

    #[error("Failed to parse font face: {0}")]
    FaceParse(String),

    #[error("Glyph is empty")]
    EmptyGlyph,

    #[error("Glyph not found in font: {0:?}")]
    GlyphNotFound(char),

    #[error("Failed to decode embedded glyph image: {0}")]
    ImageDecode(String),
}

/// Error type for raw level board parsing.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),

    #[error("Board row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("Board must have at least one row and one column")]
    EmptyBoard,
}

/// Result type for simulation operations.
pub type GameResult<T> = Result<T, GameError>;
