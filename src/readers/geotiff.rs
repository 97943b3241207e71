use super::{DataReader, RasterBand, metadata};
use crate::constants::{GDAL_METADATA_TAG, SCALE_FACTOR_KEY};
use crate::error::AnalysisError;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek};
use std::path::PathBuf;
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;
use tracing::debug;

pub struct GeoTiffReader {
    pub path: PathBuf,
}

impl GeoTiffReader {
    fn read_error(&self, what: &str, e: impl std::fmt::Display) -> AnalysisError {
        AnalysisError::RasterRead {
            path: self.path.clone(),
            message: format!("{}: {}", what, e),
        }
    }

    fn scale_factor<R: Read + Seek>(&self, decoder: &mut Decoder<R>) -> Result<f64, AnalysisError> {
        let missing = |reason: String| AnalysisError::MissingScaleFactor {
            path: self.path.clone(),
            reason,
        };

        let xml = decoder
            .find_tag(Tag::from_u16_exhaustive(GDAL_METADATA_TAG))
            .map_err(|e| self.read_error("Failed to read GDAL metadata tag", e))?
            .ok_or_else(|| missing("no GDAL metadata tag".to_string()))?
            .into_string()
            .map_err(|e| missing(format!("GDAL metadata is not text: {}", e)))?;

        let raw = metadata::find_item(&xml, SCALE_FACTOR_KEY)
            .map_err(|e| missing(format!("malformed GDAL metadata: {}", e)))?
            .ok_or_else(|| missing(format!("no {} item", SCALE_FACTOR_KEY)))?;

        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(missing(format!("'{}' is not a number", raw))),
        }
    }
}

impl DataReader for GeoTiffReader {
    fn read_band(&self) -> Result<RasterBand, AnalysisError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AnalysisError::FileNotFound(self.path.clone()),
            _ => self.read_error("Failed to open file", e),
        })?;

        let reader = BufReader::new(file);

        let mut decoder =
            Decoder::new(reader).map_err(|e| self.read_error("Failed to decode TIFF", e))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| self.read_error("Failed to get dimensions", e))?;

        match decoder
            .colortype()
            .map_err(|e| self.read_error("Failed to get color type", e))?
        {
            ColorType::Gray(_) => {}
            other => {
                return Err(AnalysisError::UnsupportedPixelFormat {
                    path: self.path.clone(),
                    format: format!("{:?}", other),
                });
            }
        }

        let scale_factor = self.scale_factor(&mut decoder)?;

        let values: Vec<f64> = match decoder
            .read_image()
            .map_err(|e| self.read_error("Failed to read image", e))?
        {
            DecodingResult::U8(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::U16(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::U32(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::U64(data) => data.into_iter().map(|x| x as f64).collect(),
            DecodingResult::I8(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::I16(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::I32(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::I64(data) => data.into_iter().map(|x| x as f64).collect(),
            DecodingResult::F32(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::F64(data) => data,
            _ => {
                return Err(AnalysisError::UnsupportedPixelFormat {
                    path: self.path.clone(),
                    format: "unsupported sample type".to_string(),
                });
            }
        };

        debug!(
            path = %self.path.display(),
            width,
            height,
            scale_factor,
            "read raster band"
        );

        Ok(RasterBand {
            width,
            height,
            values,
            scale_factor,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::constants::GDAL_METADATA_TAG;
    use std::fs::File;
    use std::path::Path;
    use tiff::encoder::colortype::{self, ColorType};
    use tiff::encoder::{TiffEncoder, TiffValue};
    use tiff::tags::Tag;

    pub fn scale_factor_xml(value: &str) -> String {
        format!(
            "<GDALMetadata>\n  <Item name=\"SCALE_FACTOR\" sample=\"0\">{}</Item>\n</GDALMetadata>",
            value
        )
    }

    pub fn dataset_scale_factor_xml(value: &str) -> String {
        format!(
            "<GDALMetadata>\n  <Item name=\"SCALE_FACTOR\">{}</Item>\n</GDALMetadata>",
            value
        )
    }

    /// Writes a single-band f32 TIFF, with a GDAL metadata block when given.
    pub fn write_tiff(path: &Path, width: u32, height: u32, data: &[f32], metadata: Option<&str>) {
        write_tiff_as::<colortype::Gray32Float>(path, width, height, data, metadata);
    }

    pub fn write_tiff_as<C>(
        path: &Path,
        width: u32,
        height: u32,
        data: &[C::Inner],
        metadata: Option<&str>,
    ) where
        C: ColorType,
        [C::Inner]: TiffValue,
    {
        let file = File::create(path).unwrap();
        let mut encoder = TiffEncoder::new(file).unwrap();
        let mut image = encoder.new_image::<C>(width, height).unwrap();
        if let Some(xml) = metadata {
            image
                .encoder()
                .write_tag(Tag::from_u16_exhaustive(GDAL_METADATA_TAG), xml)
                .unwrap();
        }
        image.write_data(data).unwrap();
    }
}
