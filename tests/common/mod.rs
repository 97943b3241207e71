use std::fs::File;
use std::path::{Path, PathBuf};

use pairedt::constants::GDAL_METADATA_TAG;
use tiff::encoder::colortype::{self, ColorType};
use tiff::encoder::{TiffEncoder, TiffValue};
use tiff::tags::Tag;

/// Band 1 scale factor item.
pub fn band_metadata(scale_factor: &str) -> String {
    format!(
        "<GDALMetadata>\n  <Item name=\"SCALE_FACTOR\" sample=\"0\">{}</Item>\n</GDALMetadata>",
        scale_factor
    )
}

/// Dataset-level scale factor item, no `sample` attribute.
pub fn dataset_metadata(scale_factor: &str) -> String {
    format!(
        "<GDALMetadata>\n  <Item name=\"SCALE_FACTOR\">{}</Item>\n</GDALMetadata>",
        scale_factor
    )
}

pub fn write_raster_as<C>(
    dir: &Path,
    file_name: &str,
    width: u32,
    height: u32,
    data: &[C::Inner],
    metadata: &str,
) -> PathBuf
where
    C: ColorType,
    [C::Inner]: TiffValue,
{
    let path = dir.join(file_name);

    let file = File::create(&path).unwrap();
    let mut encoder = TiffEncoder::new(file).unwrap();
    let mut image = encoder.new_image::<C>(width, height).unwrap();
    image
        .encoder()
        .write_tag(Tag::from_u16_exhaustive(GDAL_METADATA_TAG), metadata)
        .unwrap();
    image.write_data(data).unwrap();

    path
}

/// f32 raster with a band 1 scale factor.
pub fn write_raster(
    dir: &Path,
    file_name: &str,
    width: u32,
    height: u32,
    data: &[f32],
    scale_factor: &str,
) -> PathBuf {
    write_raster_as::<colortype::Gray32Float>(
        dir,
        file_name,
        width,
        height,
        data,
        &band_metadata(scale_factor),
    )
}
