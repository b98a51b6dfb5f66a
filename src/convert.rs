//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use mta_gamma::FitConfig;

use crate::config::FitToml;

/// Builds a validated `FitConfig` from the `[fit]` section.
pub fn build_fit_config(t: &FitToml) -> Result<FitConfig> {
    if t.max_iters == 0 {
        bail!("fit.max_iters must be positive");
    }
    if !(t.sd_tolerance.is_finite() && t.sd_tolerance > 0.0) {
        bail!("fit.sd_tolerance must be finite and positive, got {}", t.sd_tolerance);
    }
    if !(t.initial_step.is_finite() && t.initial_step > 0.0) {
        bail!("fit.initial_step must be finite and positive, got {}", t.initial_step);
    }
    Ok(FitConfig::new()
        .with_max_iters(t.max_iters)
        .with_sd_tolerance(t.sd_tolerance)
        .with_restarts(t.restarts)
        .with_initial_step(t.initial_step))
}

/// Checks the histogram bin count.
pub fn validate_bins(n_bins: usize) -> Result<usize> {
    if n_bins == 0 {
        bail!("histogram.n_bins must be positive");
    }
    Ok(n_bins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_defaults() {
        let cfg = build_fit_config(&FitToml::default()).unwrap();
        assert_eq!(cfg, FitConfig::new());
    }

    #[test]
    fn overrides_pass_through() {
        let t = FitToml {
            max_iters: 10,
            sd_tolerance: 1e-8,
            restarts: 0,
            initial_step: 0.5,
        };
        let cfg = build_fit_config(&t).unwrap();
        assert_eq!(cfg.max_iters(), 10);
        assert_eq!(cfg.sd_tolerance(), 1e-8);
        assert_eq!(cfg.restarts(), 0);
        assert_eq!(cfg.initial_step(), 0.5);
    }

    #[test]
    fn invalid_values_rejected() {
        let zero_iters = FitToml {
            max_iters: 0,
            ..FitToml::default()
        };
        assert!(build_fit_config(&zero_iters).is_err());

        let bad_tol = FitToml {
            sd_tolerance: f64::NAN,
            ..FitToml::default()
        };
        assert!(build_fit_config(&bad_tol).is_err());

        assert!(validate_bins(0).is_err());
        assert_eq!(validate_bins(64).unwrap(), 64);
    }
}
