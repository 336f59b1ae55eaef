//! Error type shared by every stage of the map renderer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("tile grid row {row} is {found} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("tile grid must be bordered by floor, found {symbol:?} at row {row}, col {col}")]
    MissingBorder { row: usize, col: usize, symbol: char },

    #[error("tile size must be at least 1 pixel")]
    ZeroTileSize,

    #[error("output {0} is not supported, only .png files can be written")]
    UnsupportedOutput(PathBuf),

    #[error("cannot encode an empty {width}x{height} raster")]
    EmptyRaster { width: usize, height: usize },

    #[error("raster of {width}x{height} does not fit an image buffer")]
    OversizedRaster { width: usize, height: usize },

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
