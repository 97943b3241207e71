pub mod analysis;
pub mod config;
pub mod constants;
pub mod date_parse;
pub mod error;
pub mod mask;
pub mod readers;
pub mod report;
pub mod series;
pub mod ttest;

pub use analysis::{Outcome, PairedTTest};
pub use error::AnalysisError;
