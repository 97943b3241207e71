/// Raw pixel value marking no-data in the input rasters.
pub const SENTINEL_VALUE: f64 = -1000.0;

/// p-values strictly below this are reported as significant.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Name of the metadata item holding the per-band scale factor.
pub const SCALE_FACTOR_KEY: &str = "SCALE_FACTOR";

/// TIFF tag where GDAL stores its XML metadata block.
pub const GDAL_METADATA_TAG: u16 = 42112;

/// Band-level items for band 1 carry `sample="0"` in the GDAL metadata XML.
pub const FIRST_BAND_SAMPLE: &str = "0";
