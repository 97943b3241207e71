use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("input raster not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("unsupported file type: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    #[error("failed to read raster {}: {message}", path.display())]
    RasterRead { path: PathBuf, message: String },

    #[error("unsupported pixel format in {}: {format}", path.display())]
    UnsupportedPixelFormat { path: PathBuf, format: String },

    #[error("cannot parse a date from file name '{file_name}': {reason}")]
    DateParse { file_name: String, reason: String },

    #[error("missing or invalid SCALE_FACTOR in {}: {reason}", path.display())]
    MissingScaleFactor { path: PathBuf, reason: String },

    #[error(
        "raster dimensions differ: reference is {reference:?}, comparison is {comparison:?}"
    )]
    ShapeMismatch {
        reference: (u32, u32),
        comparison: (u32, u32),
    },

    #[error("series lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("paired t-test needs at least 2 valid pairs, got {n}")]
    InsufficientSample { n: usize },

    #[error("t distribution error: {0}")]
    Distribution(String),

    #[error("failed to write report to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
