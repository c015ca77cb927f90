//! Error types for GridStat

use thiserror::Error;

/// Main error type for GridStat operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("empty dataset: {context}")]
    EmptyDataset { context: String },

    #[error("invalid cell size: {value} (must be > 0)")]
    InvalidCellSize { value: f64 },

    #[error("grid of {rows} x {cols} cells exceeds the safety ceiling of {limit}")]
    GridTooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },

    #[error("index out of bounds: ({row}, {col}) in raster of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("band {index} out of range (stack has {count} bands)")]
    BandOutOfRange { index: usize, count: usize },

    #[error("raster size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch {
        er: usize,
        ec: usize,
        ar: usize,
        ac: usize,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Convenience constructor for `EmptyDataset`
    pub fn empty_dataset(context: impl Into<String>) -> Self {
        Error::EmptyDataset {
            context: context.into(),
        }
    }
}

/// Result type alias for GridStat operations
pub type Result<T> = std::result::Result<T, Error>;
