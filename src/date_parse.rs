//! Acquisition date encoded in raster file names.
//!
//! Grammar, applied to the base name of the path:
//!
//! ```text
//! segments  := file_name split on '_'
//! token     := second-to-last segment
//! date_part := token up to the first 'T'
//! date      := date_part as YYYYMMDD (exactly eight digits)
//! ```
//!
//! `cropped_AD01_Pre-fire_NDVI_20210724T081609_20m.tif` gives 2021-07-24.

use chrono::NaiveDate;
use std::path::Path;

use crate::error::AnalysisError;

/// `%b %d %Y`, e.g. "Jul 24 2021".
pub const DISPLAY_FORMAT: &str = "%b %d %Y";

pub fn parse_file_date(path: &Path) -> Result<NaiveDate, AnalysisError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let fail = |reason: &str| AnalysisError::DateParse {
        file_name: file_name.clone(),
        reason: reason.to_string(),
    };

    let segments: Vec<&str> = file_name.split('_').collect();
    if segments.len() < 2 {
        return Err(fail("expected at least two '_'-separated segments"));
    }

    let token = segments[segments.len() - 2];
    let date_part = token.split('T').next().unwrap_or(token);

    if date_part.len() != 8 || !date_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(fail(&format!("'{}' is not a YYYYMMDD date", date_part)));
    }

    NaiveDate::parse_from_str(date_part, "%Y%m%d").map_err(|e| fail(&e.to_string()))
}

pub fn display_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel2_style_name() {
        let path = Path::new("data/AD/NDVI/cropped_AD01_Pre-fire_NDVI_20210724T081609_20m.tif");
        let date = parse_file_date(path).unwrap();

        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 7, 24).unwrap());
        assert_eq!(display_date(&date), "Jul 24 2021");
    }

    #[test]
    fn test_token_without_time_part() {
        let date = parse_file_date(Path::new("ndvi_20240101_x.tif")).unwrap();
        assert_eq!(display_date(&date), "Jan 01 2024");
    }

    #[test]
    fn test_single_segment_fails() {
        let err = parse_file_date(Path::new("ndvi.tif")).unwrap_err();
        assert!(matches!(err, AnalysisError::DateParse { .. }));
    }

    #[test]
    fn test_wrong_token_position_fails() {
        // date is the last segment, not the second-to-last
        assert!(parse_file_date(Path::new("ndvi_20210724T081609.tif")).is_err());
    }

    #[test]
    fn test_impossible_calendar_date_fails() {
        let err = parse_file_date(Path::new("ndvi_20210231T000000_20m.tif")).unwrap_err();
        assert!(matches!(err, AnalysisError::DateParse { .. }));
    }

    #[test]
    fn test_short_token_fails() {
        assert!(parse_file_date(Path::new("ndvi_2021724T0_20m.tif")).is_err());
    }
}
