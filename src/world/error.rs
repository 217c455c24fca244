//! Error types for level and mission data loading.

use thiserror::Error;

/// Errors that can occur when loading level or mission data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A grid row or layer doesn't match the level size.
    #[error("Grid mismatch in {layer}: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    GridMismatch {
        layer: &'static str,
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    /// A grid cell uses a character with no palette entry.
    #[error("Unknown {layer} entry '{character}' at position ({x}, {y})")]
    UnknownPaletteEntry {
        layer: &'static str,
        character: char,
        x: usize,
        y: usize,
    },

    /// The entity layer has no player marker.
    #[error("Level '{0}' has no player start")]
    MissingPlayerStart(String),

    /// The entity layer has more than one player marker.
    #[error("Second player start at ({x}, {y})")]
    DuplicatePlayerStart { x: usize, y: usize },
}
