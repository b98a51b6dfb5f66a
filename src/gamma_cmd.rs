//! Gamma-fit command: bin samples, fit, report as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use mta_gamma::{GammaFit, Histogram, fit_gamma_profile};

use crate::cli::GammaFitArgs;
use crate::config::MtaConfig;
use crate::convert;

/// JSON report printed by `gamma-fit`.
#[derive(Debug, Serialize)]
struct FitReport<'a> {
    #[serde(flatten)]
    fit: &'a GammaFit,
    n_bins: usize,
    n_dropped: usize,
    sample_mean: f64,
    sample_std: f64,
    profile_mean: f64,
    profile_sigma: f64,
}

/// Run the gamma-fit pipeline.
pub fn run(args: GammaFitArgs) -> Result<()> {
    let _cmd = info_span!("gamma-fit").entered();
    let config = MtaConfig::load(&args.config)?;
    let fit_config = convert::build_fit_config(&config.fit)?;
    let n_bins = convert::validate_bins(args.bins.unwrap_or(config.histogram.n_bins))?;

    let samples = read_samples(&args.input)?;
    info!(path = %args.input.display(), n = samples.len(), "samples read");

    let hist = Histogram::from_samples(&samples, n_bins).context("failed to bin samples")?;
    let fit = fit_gamma_profile(hist.x(), hist.y(), hist.mean(), hist.std(), &fit_config);
    info!(converged = fit.converged(), "fit finished");

    let report = FitReport {
        fit: &fit,
        n_bins,
        n_dropped: hist.n_dropped(),
        sample_mean: hist.mean(),
        sample_std: hist.std(),
        profile_mean: fit.profile().mean(),
        profile_sigma: fit.profile().sigma(),
    };
    let json = serde_json::to_string_pretty(&report).context("failed to serialize fit")?;
    println!("{json}");
    Ok(())
}

fn read_samples(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read samples: {}", path.display()))?;
    parse_samples(&text).with_context(|| format!("invalid samples file: {}", path.display()))
}

/// One value per line; blank lines and `#` comments are skipped.
fn parse_samples(text: &str) -> Result<Vec<f64>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| {
            line.parse::<f64>()
                .with_context(|| format!("line {n}: not a number: {line:?}"))
        })
        .collect()
}
