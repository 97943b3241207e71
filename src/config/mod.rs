use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub mod error;
pub use error::ConfigError;

/// The five parameters of a single pre/post comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    reference_raster: PathBuf,
    last_raster: PathBuf,
    variable_name: String,
    area_name: String,
    output_dir: PathBuf,
}

// Labels end up in the report file name, so blank ones are rejected while
// deserializing rather than producing "Paired-t-test_results_-values_.txt".
impl<'de> Deserialize<'de> for RunConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RunConfigHelper {
            reference_raster: PathBuf,
            last_raster: PathBuf,
            variable_name: String,
            area_name: String,
            output_dir: PathBuf,
        }

        let helper = RunConfigHelper::deserialize(deserializer)?;

        RunConfig::new(
            helper.reference_raster,
            helper.last_raster,
            helper.variable_name,
            helper.area_name,
            helper.output_dir,
        )
        .map_err(D::Error::custom)
    }
}

impl RunConfig {
    pub fn new(
        reference_raster: impl Into<PathBuf>,
        last_raster: impl Into<PathBuf>,
        variable_name: impl Into<String>,
        area_name: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let variable_name = variable_name.into();
        let area_name = area_name.into();

        if variable_name.trim().is_empty() {
            return Err(ConfigError::EmptyField("variable_name"));
        }
        if area_name.trim().is_empty() {
            return Err(ConfigError::EmptyField("area_name"));
        }

        Ok(Self {
            reference_raster: reference_raster.into(),
            last_raster: last_raster.into(),
            variable_name,
            area_name,
            output_dir: output_dir.into(),
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RunConfig, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: RunConfig = serde_json::from_reader(reader)?;

        Ok(config)
    }

    pub fn reference_raster(&self) -> &Path {
        &self.reference_raster
    }

    pub fn last_raster(&self) -> &Path {
        &self.last_raster
    }

    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }

    pub fn area_name(&self) -> &str {
        &self.area_name
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
