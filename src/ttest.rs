use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;
use tracing::debug;

use crate::error::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    pub t_statistic: f64,
    pub p_value: f64,
    pub mean_pre: f64,
    pub mean_post: f64,
    pub n: usize,
    pub df: f64,
}

impl TestResult {
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Dependent-samples t-test on `pre - post`.
///
/// With zero variance in the differences the statistic is degenerate:
/// identical samples give `t = 0, p = 1`, a constant non-zero offset gives
/// `t = ±inf, p = 0`.
pub fn paired_t_test(pre: &[f64], post: &[f64]) -> Result<TestResult, AnalysisError> {
    if pre.len() != post.len() {
        return Err(AnalysisError::LengthMismatch {
            left: pre.len(),
            right: post.len(),
        });
    }

    let n = pre.len();
    if n < 2 {
        return Err(AnalysisError::InsufficientSample { n });
    }

    let mean_pre = pre.iter().mean();
    let mean_post = post.iter().mean();

    let diffs: Vec<f64> = pre.iter().zip(post).map(|(a, b)| a - b).collect();
    let mean_diff = diffs.iter().mean();
    let sd_diff = diffs.iter().std_dev();
    let df = (n - 1) as f64;

    if !mean_diff.is_finite() || !sd_diff.is_finite() {
        return Err(AnalysisError::Distribution(
            "paired differences contain non-finite values".to_string(),
        ));
    }

    let (t_statistic, p_value) = if sd_diff == 0.0 {
        if mean_diff == 0.0 {
            (0.0, 1.0)
        } else {
            (mean_diff.signum() * f64::INFINITY, 0.0)
        }
    } else {
        let t = mean_diff / (sd_diff / (n as f64).sqrt());
        if !t.is_finite() {
            return Err(AnalysisError::Distribution(format!(
                "t statistic is not finite: {}",
                t
            )));
        }
        let dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| AnalysisError::Distribution(e.to_string()))?;
        (t, (2.0 * dist.sf(t.abs())).clamp(0.0, 1.0))
    };

    debug!(n, t_statistic, p_value, mean_pre, mean_post, "paired t-test");

    Ok(TestResult {
        t_statistic,
        p_value,
        mean_pre,
        mean_post,
        n,
        df,
    })
}
