use std::fmt;

use crate::error::AnalysisError;

pub trait DataReader {
    fn read_band(&self) -> Result<RasterBand, AnalysisError>;
}

pub enum FileType {
    GeoTiff,
}

/// Band 1 of a raster, raw values in row-major order plus its scale factor.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterBand {
    pub width: u32,
    pub height: u32,
    pub values: Vec<f64>,
    pub scale_factor: f64,
}

impl RasterBand {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Display for RasterBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let finite = || self.values.iter().copied().filter(|x| x.is_finite());
        let min_value = finite().fold(f64::NAN, f64::min);
        let max_value = finite().fold(f64::NAN, f64::max);

        write!(
            f,
            "Width: {}\nHeight: {}\nBuffer Length: {}\nScale factor: {}\nMin raw value: {}\nMax raw value: {}",
            self.width,
            self.height,
            self.values.len(),
            self.scale_factor,
            min_value,
            max_value,
        )
    }
}
