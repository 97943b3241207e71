//! Lookup of items in the XML block GDAL writes into the `GDAL_METADATA`
//! TIFF tag, e.g.
//!
//! ```text
//! <GDALMetadata>
//!   <Item name="SCALE_FACTOR" sample="0">0.0001</Item>
//! </GDALMetadata>
//! ```
//!
//! Items without a `sample` attribute belong to the dataset, items with
//! `sample="N"` to band `N + 1`.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::constants::FIRST_BAND_SAMPLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemScope {
    Dataset,
    FirstBand,
}

/// Returns the text of item `key`, preferring the band 1 item over the
/// dataset-level one. `Ok(None)` when neither is present.
pub fn find_item(xml: &str, key: &str) -> Result<Option<String>, String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut band_value = None;
    let mut dataset_value = None;
    let mut current: Option<ItemScope> = None;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) if e.name().as_ref() == b"Item" => {
                let mut name = None;
                let mut sample = None;
                for attr in e.attributes() {
                    let attr = attr.map_err(|e| e.to_string())?;
                    let value = attr.unescape_value().map_err(|e| e.to_string())?;
                    match attr.key.as_ref() {
                        b"name" => name = Some(value.into_owned()),
                        b"sample" => sample = Some(value.into_owned()),
                        _ => {}
                    }
                }

                current = if name.as_deref() == Some(key) {
                    match sample.as_deref() {
                        None => Some(ItemScope::Dataset),
                        Some(FIRST_BAND_SAMPLE) => Some(ItemScope::FirstBand),
                        Some(_) => None,
                    }
                } else {
                    None
                };
            }
            Event::Text(t) => {
                if let Some(scope) = current {
                    let text = t.unescape().map_err(|e| e.to_string())?.trim().to_string();
                    match scope {
                        ItemScope::FirstBand => band_value = Some(text),
                        ItemScope::Dataset => dataset_value = Some(text),
                    }
                }
            }
            Event::End(e) if e.name().as_ref() == b"Item" => current = None,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(band_value.or(dataset_value))
}
