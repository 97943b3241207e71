use super::types::FileType;
use crate::error::AnalysisError;
use std::path::Path;

pub fn reader_from_filetype(path: &Path) -> Result<FileType, AnalysisError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("tif") | Some("tiff") => Ok(FileType::GeoTiff),
        _ => Err(AnalysisError::UnsupportedFileType(path.to_path_buf())),
    }
}
