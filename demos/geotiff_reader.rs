use pairedt::readers;
use pairedt::series::RasterSeries;
use std::path::Path;

fn main() {
    let path = "./data/cropped_AD01_Pre-fire_NDVI_20210724T081609_20m.tif";

    let reader = match readers::create_reader(path) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Failed to create reader: {}", e);
            return;
        }
    };

    match reader.read_band() {
        Ok(band) => println!("{}", band),
        Err(e) => {
            eprintln!("Failed to read band: {}", e);
            return;
        }
    }

    match RasterSeries::load(Path::new(path)) {
        Ok(series) => println!(
            "Date: {}, valid pixels: {} / {}",
            series.display_date(),
            series.valid_count(),
            series.len()
        ),
        Err(e) => eprintln!("Failed to load series: {}", e),
    }
}
