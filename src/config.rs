use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level `mta.toml` configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MtaConfig {
    /// Gamma fit settings.
    #[serde(default)]
    pub fit: FitToml,

    /// Histogram settings.
    #[serde(default)]
    pub histogram: HistogramToml,
}

impl MtaConfig {
    /// Reads `path`, or returns defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitToml {
    #[serde(default = "default_max_iters")]
    pub max_iters: u64,
    #[serde(default = "default_sd_tolerance")]
    pub sd_tolerance: f64,
    #[serde(default = "default_restarts")]
    pub restarts: usize,
    #[serde(default = "default_initial_step")]
    pub initial_step: f64,
}

impl Default for FitToml {
    fn default() -> Self {
        Self {
            max_iters: default_max_iters(),
            sd_tolerance: default_sd_tolerance(),
            restarts: default_restarts(),
            initial_step: default_initial_step(),
        }
    }
}

fn default_max_iters() -> u64 {
    1000
}
fn default_sd_tolerance() -> f64 {
    1e-14
}
fn default_restarts() -> usize {
    2
}
fn default_initial_step() -> f64 {
    0.2
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistogramToml {
    #[serde(default = "default_n_bins")]
    pub n_bins: usize,
}

impl Default for HistogramToml {
    fn default() -> Self {
        Self {
            n_bins: default_n_bins(),
        }
    }
}

fn default_n_bins() -> usize {
    mta_gamma::DEFAULT_BINS
}
