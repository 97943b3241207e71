use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::AnalysisError;
use crate::mask::align;
use crate::report::{ReportContext, write_report};
use crate::series::RasterSeries;
use crate::ttest::{TestResult, paired_t_test};

pub const SKIPPED_MESSAGE: &str =
    "The length of data in two groups are not equal. So, the paired t-test is not applicable.";

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Tested {
        output_path: PathBuf,
        result: TestResult,
    },
    /// Aligned counts differed; no report was written.
    Skipped {
        reference_valid: usize,
        comparison_valid: usize,
    },
}

#[derive(Debug)]
pub struct PairedTTest {
    config: RunConfig,
}

impl PairedTTest {
    pub fn new(config: RunConfig) -> Self {
        PairedTTest { config }
    }

    pub fn run(&self) -> Result<Outcome, AnalysisError> {
        let pre = RasterSeries::load(self.config.reference_raster())?;
        let post = RasterSeries::load(self.config.last_raster())?;

        if pre.dimensions() != post.dimensions() {
            return Err(AnalysisError::ShapeMismatch {
                reference: pre.dimensions(),
                comparison: post.dimensions(),
            });
        }

        let aligned = align(&pre, &post)?;
        if !aligned.counts_match() {
            warn!(
                reference_valid = aligned.reference.len(),
                comparison_valid = aligned.comparison.len(),
                "aligned counts differ, skipping test"
            );
            return Ok(Outcome::Skipped {
                reference_valid: aligned.reference.len(),
                comparison_valid: aligned.comparison.len(),
            });
        }
        info!(pairs = aligned.reference.len(), "masks aligned");

        let result = paired_t_test(&aligned.reference, &aligned.comparison)?;

        let reference_date = pre.display_date();
        let last_date = post.display_date();
        let ctx = ReportContext {
            variable_name: self.config.variable_name(),
            area_name: self.config.area_name(),
            reference_date: &reference_date,
            last_date: &last_date,
        };
        let output_path = write_report(self.config.output_dir(), &ctx, &result)?;

        info!(
            path = %output_path.display(),
            p_value = result.p_value,
            t_statistic = result.t_statistic,
            "report written"
        );

        Ok(Outcome::Tested {
            output_path,
            result,
        })
    }
}
