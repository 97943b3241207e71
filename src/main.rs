use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pairedt::analysis::SKIPPED_MESSAGE;
use pairedt::config::RunConfig;
use pairedt::{AnalysisError, Outcome, PairedTTest};

#[derive(Parser, Debug)]
#[command(
    name = "pairedt",
    about = "Paired t-test between a pre-event and a post-event raster"
)]
struct Args {
    /// JSON file holding the five run parameters.
    #[arg(short, long, conflicts_with_all = ["reference", "last", "variable", "area", "output_dir"])]
    config: Option<PathBuf>,

    /// Reference (pre-event) raster.
    #[arg(short, long, required_unless_present = "config")]
    reference: Option<PathBuf>,

    /// Last (post-event) raster.
    #[arg(short, long, required_unless_present = "config")]
    last: Option<PathBuf>,

    /// Variable label, e.g. NDVI.
    #[arg(short, long, required_unless_present = "config")]
    variable: Option<String>,

    /// Study area label.
    #[arg(short, long, required_unless_present = "config")]
    area: Option<String>,

    /// Directory the report is written to.
    #[arg(short, long, required_unless_present = "config")]
    output_dir: Option<PathBuf>,

    /// Log level when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> Result<RunConfig, AnalysisError> {
        if let Some(path) = self.config {
            return Ok(RunConfig::from_file(path)?);
        }

        Ok(RunConfig::new(
            self.reference.unwrap_or_default(),
            self.last.unwrap_or_default(),
            self.variable.unwrap_or_default(),
            self.area.unwrap_or_default(),
            self.output_dir.unwrap_or_default(),
        )?)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let outcome = args
        .into_config()
        .and_then(|config| PairedTTest::new(config).run());

    match outcome {
        Ok(Outcome::Tested { output_path, .. }) => {
            println!("\nThe outputs are written in:\n{}", output_path.display());
            ExitCode::SUCCESS
        }
        Ok(Outcome::Skipped { .. }) => {
            println!("{}", SKIPPED_MESSAGE);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
