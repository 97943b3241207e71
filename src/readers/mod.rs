pub mod geotiff;
pub mod metadata;
pub mod types;
pub mod utils;

pub use geotiff::GeoTiffReader;
pub use types::{DataReader, FileType, RasterBand};
pub use utils::reader_from_filetype;

use crate::error::AnalysisError;
use std::path::PathBuf;

pub fn create_reader(path: impl Into<PathBuf>) -> Result<Box<dyn DataReader>, AnalysisError> {
    let path = path.into();
    match reader_from_filetype(&path)? {
        FileType::GeoTiff => Ok(Box::new(GeoTiffReader { path })),
    }
}
