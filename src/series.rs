use chrono::NaiveDate;
use std::path::Path;
use tracing::info;

use crate::constants::SENTINEL_VALUE;
use crate::date_parse::{display_date, parse_file_date};
use crate::error::AnalysisError;
use crate::readers::{RasterBand, create_reader};

/// Scaled band values with one entry per original pixel, `None` where the
/// raw value was the no-data sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSeries {
    date: NaiveDate,
    width: u32,
    height: u32,
    pixels: Vec<Option<f64>>,
}

impl RasterSeries {
    /// Masks the sentinel on raw values, then scales what is left.
    pub fn from_band(band: RasterBand, date: NaiveDate) -> Self {
        let scale = band.scale_factor;
        let pixels = band
            .values
            .into_iter()
            .map(|raw| (raw != SENTINEL_VALUE).then_some(raw * scale))
            .collect();

        Self {
            date,
            width: band.width,
            height: band.height,
            pixels,
        }
    }

    /// Reads band 1 of `path` and dates it from the file name.
    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let date = parse_file_date(path)?;
        let band = create_reader(path)?.read_band()?;
        let series = Self::from_band(band, date);

        info!(
            path = %path.display(),
            date = %series.display_date(),
            pixels = series.len(),
            valid = series.valid_count(),
            "loaded raster"
        );

        Ok(series)
    }

    pub fn display_date(&self) -> String {
        display_date(&self.date)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[Option<f64>] {
        &self.pixels
    }

    /// Total pixel count, masked or not.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// `true` = valid, per original pixel position.
    pub fn mask(&self) -> impl Iterator<Item = bool> + '_ {
        self.pixels.iter().map(Option::is_some)
    }

    pub fn valid_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }

    /// Valid values only, in row-major order.
    pub fn compressed(&self) -> Vec<f64> {
        self.pixels.iter().flatten().copied().collect()
    }
}
