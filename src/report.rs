use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::SIGNIFICANCE_LEVEL;
use crate::error::AnalysisError;
use crate::ttest::TestResult;

const P_VALUE_LABEL: &str = "P-value: ";

/// Identifies what was compared; every field is printed verbatim.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub variable_name: &'a str,
    pub area_name: &'a str,
    pub reference_date: &'a str,
    pub last_date: &'a str,
}

pub fn report_file_name(variable_name: &str, area_name: &str) -> String {
    format!(
        "Paired-t-test_results_{}-values_{}.txt",
        variable_name, area_name
    )
}

pub fn significance_note(variable_name: &str, result: &TestResult) -> String {
    let qualifier = if result.is_significant(SIGNIFICANCE_LEVEL) {
        ""
    } else {
        "NOT "
    };
    format!(
        "NOTE: There is {}statistically significant difference between the {} values of two groups.",
        qualifier, variable_name
    )
}

pub fn render(ctx: &ReportContext<'_>, result: &TestResult) -> String {
    let var = ctx.variable_name;
    let mut txt = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(txt, "          ***      Test Summary     ***          \n");
    let _ = writeln!(txt, "Variable Name: {}", var);
    let _ = writeln!(txt, "Study Area Name: {}", ctx.area_name);
    let _ = writeln!(txt, "Date of the Reference {}: {}", var, ctx.reference_date);
    let _ = writeln!(txt, "Date of the Last {}     : {}", var, ctx.last_date);
    let _ = writeln!(txt, "{}\n", "_".repeat(50));
    let _ = writeln!(txt, "          *** Paired T-Test Results ***          \n");
    let _ = writeln!(txt, "{}{:.4}", P_VALUE_LABEL, result.p_value);
    let _ = writeln!(txt, "T-value: {:?}\n", result.t_statistic);
    let _ = writeln!(
        txt,
        "Average {} of the Reference Date: {:?}",
        var, result.mean_pre
    );
    let _ = writeln!(
        txt,
        "Average {} of the Last Date     : {:?}\n",
        var, result.mean_post
    );
    let _ = writeln!(txt, "{}", significance_note(var, result));

    txt
}

/// Reads the p-value back out of a rendered report.
pub fn parse_p_value(report: &str) -> Option<f64> {
    report
        .lines()
        .find_map(|line| line.strip_prefix(P_VALUE_LABEL))
        .and_then(|value| value.trim().parse().ok())
}

/// Renders the report and writes it to `output_dir`, replacing any
/// previous file of the same name.
pub fn write_report(
    output_dir: &Path,
    ctx: &ReportContext<'_>,
    result: &TestResult,
) -> Result<PathBuf, AnalysisError> {
    let output_path = output_dir.join(report_file_name(ctx.variable_name, ctx.area_name));
    let text = render(ctx, result);

    fs::write(&output_path, text).map_err(|source| AnalysisError::OutputWrite {
        path: output_path.clone(),
        source,
    })?;

    Ok(output_path)
}
