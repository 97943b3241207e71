use tracing::debug;

use crate::error::AnalysisError;
use crate::series::RasterSeries;

/// Values valid in both series, in original pixel order.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    pub reference: Vec<f64>,
    pub comparison: Vec<f64>,
}

impl AlignedPair {
    pub fn counts_match(&self) -> bool {
        self.reference.len() == self.comparison.len()
    }
}

/// Per-pixel validity shared by both series: valid only where both are.
pub fn combined_mask(
    reference: &RasterSeries,
    comparison: &RasterSeries,
) -> Result<Vec<bool>, AnalysisError> {
    if reference.len() != comparison.len() {
        return Err(AnalysisError::LengthMismatch {
            left: reference.len(),
            right: comparison.len(),
        });
    }

    Ok(reference
        .mask()
        .zip(comparison.mask())
        .map(|(a, b)| a && b)
        .collect())
}

fn apply_mask(series: &RasterSeries, mask: &[bool]) -> Vec<f64> {
    series
        .pixels()
        .iter()
        .zip(mask)
        .filter_map(|(value, &keep)| if keep { *value } else { None })
        .collect()
}

/// Computes the union of invalid positions once, then compacts both series
/// with it.
pub fn align(
    reference: &RasterSeries,
    comparison: &RasterSeries,
) -> Result<AlignedPair, AnalysisError> {
    let mask = combined_mask(reference, comparison)?;

    let pair = AlignedPair {
        reference: apply_mask(reference, &mask),
        comparison: apply_mask(comparison, &mask),
    };

    debug!(
        reference_valid = reference.valid_count(),
        comparison_valid = comparison.valid_count(),
        aligned_reference = pair.reference.len(),
        aligned_comparison = pair.comparison.len(),
        "aligned masks"
    );

    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::RasterBand;
    use chrono::NaiveDate;

    fn series(values: &[f64], scale_factor: f64) -> RasterSeries {
        RasterSeries::from_band(
            RasterBand {
                width: values.len() as u32,
                height: 1,
                values: values.to_vec(),
                scale_factor,
            },
            NaiveDate::from_ymd_opt(2021, 7, 24).unwrap(),
        )
    }

    #[test]
    fn test_union_of_invalid_positions() {
        let reference = series(&[-1000.0, 2.0, 4.0, 6.0], 0.5);
        let comparison = series(&[1.0, -1000.0, 5.0, 7.0], 0.5);

        assert_eq!(
            combined_mask(&reference, &comparison).unwrap(),
            vec![false, false, true, true]
        );

        let pair = align(&reference, &comparison).unwrap();
        assert_eq!(pair.reference, vec![2.0, 3.0]);
        assert_eq!(pair.comparison, vec![2.5, 3.5]);
        assert!(pair.counts_match());
    }

    #[test]
    fn test_union_is_symmetric() {
        let a = series(&[1.0, -1000.0, 3.0, -1000.0, 5.0], 1.0);
        let b = series(&[-1000.0, 2.0, 3.0, 4.0, -1000.0], 1.0);

        let ab = align(&a, &b).unwrap();
        let ba = align(&b, &a).unwrap();

        assert_eq!(ab.reference, ba.comparison);
        assert_eq!(ab.comparison, ba.reference);
        assert_eq!(ab.reference, vec![3.0]);
    }

    #[test]
    fn test_identical_masks_keep_all_valid_pixels() {
        let a = series(&[1.0, -1000.0, 3.0, 4.0], 1.0);
        let b = series(&[9.0, -1000.0, 8.0, 7.0], 1.0);

        let pair = align(&a, &b).unwrap();
        assert_eq!(pair.reference.len(), a.valid_count());
        assert_eq!(pair.comparison.len(), b.valid_count());
    }

    #[test]
    fn test_length_mismatch_fails() {
        let a = series(&[1.0, 2.0, 3.0], 1.0);
        let b = series(&[1.0, 2.0], 1.0);

        assert!(matches!(
            align(&a, &b),
            Err(AnalysisError::LengthMismatch { left: 3, right: 2 })
        ));
    }
}
