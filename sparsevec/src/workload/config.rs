use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shape of a randomly generated benchmark workload.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Length of the dense vector.
    pub dense_dim: usize,
    /// Sparse indices are drawn from `0..sparse_dim`.
    pub sparse_dim: u32,
    /// Number of random draws; repeated indices collapse, so the stored size
    /// can come out smaller.
    pub sparse_draws: usize,
    /// Values are uniform in `[0, max_value)`.
    pub max_value: f64,
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            dense_dim: 1_000_000,
            sparse_dim: 1_000_000,
            sparse_draws: 10_000,
            max_value: 1_000.0,
            seed: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum WorkloadConfigError {
    #[error("Invalid workload config: {0}")]
    Invalid(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type WorkloadConfigResult<T> = std::result::Result<T, WorkloadConfigError>;

impl WorkloadConfig {
    pub fn validate(&self) -> WorkloadConfigResult<()> {
        if self.dense_dim == 0 {
            return Err(WorkloadConfigError::Invalid(
                "dense_dim must be greater than 0".to_string(),
            ));
        }
        if self.sparse_dim == 0 {
            return Err(WorkloadConfigError::Invalid(
                "sparse_dim must be greater than 0".to_string(),
            ));
        }
        if self.max_value.is_nan() || self.max_value <= 0.0 {
            return Err(WorkloadConfigError::Invalid(format!(
                "max_value must be greater than 0, got {}",
                self.max_value
            )));
        }
        Ok(())
    }
}

impl TryFrom<&Path> for WorkloadConfig {
    type Error = WorkloadConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        log::debug!("reading workload config from {}", path.display());
        let toml_str = read_to_string(path)?;
        let config: WorkloadConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
