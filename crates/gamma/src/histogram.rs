//! Integer-valued count histogram with sample moments.

use serde::Serialize;
use tracing::debug;

use crate::error::GammaError;

/// Default number of bins.
pub const DEFAULT_BINS: usize = 256;

/// Counts of integer sample values over bins `1..=n_bins`.
///
/// Samples are truncated toward zero; value `v` is counted in bin `v`.
/// Values outside `1..=n_bins` (zero included) are dropped from the counts
/// but still enter the moments; only non-finite samples are ignored entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    x: Vec<f64>,
    y: Vec<f64>,
    mean: f64,
    std: f64,
    n_dropped: usize,
}

impl Histogram {
    /// Bins `samples` into `n_bins` unit-width bins starting at 1.
    ///
    /// # Errors
    ///
    /// [`GammaError::NoBins`] if `n_bins` is zero, [`GammaError::NoSamples`]
    /// if no sample lands in a bin.
    ///
    /// ```
    /// use mta_gamma::Histogram;
    ///
    /// let hist = Histogram::from_samples(&[1.0, 2.7, 2.0, 300.0], 4).unwrap();
    /// assert_eq!(hist.y(), &[1.0, 2.0, 0.0, 0.0]);
    /// assert_eq!(hist.n_dropped(), 1);
    /// ```
    pub fn from_samples(samples: &[f64], n_bins: usize) -> Result<Self, GammaError> {
        if n_bins == 0 {
            return Err(GammaError::NoBins);
        }

        let mut y = vec![0.0; n_bins];
        let mut finite = Vec::with_capacity(samples.len());
        let mut n_binned = 0;
        for &sample in samples {
            let value = sample.trunc();
            if !value.is_finite() {
                continue;
            }
            finite.push(value);
            if value >= 1.0 && value <= n_bins as f64 {
                y[value as usize - 1] += 1.0;
                n_binned += 1;
            }
        }
        if n_binned == 0 {
            return Err(GammaError::NoSamples);
        }

        let n = finite.len() as f64;
        let mean = finite.iter().sum::<f64>() / n;
        let var = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let n_dropped = samples.len() - n_binned;
        debug!(n_bins, n_binned, n_dropped, mean, "histogram built");

        Ok(Self {
            x: (1..=n_bins).map(|v| v as f64).collect(),
            y,
            mean,
            std: var.sqrt(),
            n_dropped,
        })
    }

    /// Bin positions `1..=n_bins`.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Counts per bin.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Mean of the finite truncated samples.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation (ddof = 0) of the finite truncated
    /// samples.
    pub fn std(&self) -> f64 {
        self.std
    }

    /// Samples that fell outside the bins or were not finite.
    pub fn n_dropped(&self) -> usize {
        self.n_dropped
    }

    /// Number of bins.
    pub fn n_bins(&self) -> usize {
        self.y.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn value_lands_in_matching_bin() {
        let hist = Histogram::from_samples(&[3.0, 3.9, 1.0], 5).unwrap();
        assert_eq!(hist.x(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(hist.y(), &[1.0, 0.0, 2.0, 0.0, 0.0]);
        assert_eq!(hist.n_dropped(), 0);
    }

    #[test]
    fn out_of_range_and_non_finite_dropped() {
        let samples = [0.5, -2.0, 6.0, f64::NAN, f64::INFINITY, 5.0];
        let hist = Histogram::from_samples(&samples, 5).unwrap();
        assert_eq!(hist.y(), &[0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(hist.n_dropped(), 5);
    }

    #[test]
    fn population_moments() {
        let hist = Histogram::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 16).unwrap();
        assert_relative_eq!(hist.mean(), 5.0);
        assert_relative_eq!(hist.std(), 2.0);
    }

    #[test]
    fn moments_use_truncated_values() {
        let hist = Histogram::from_samples(&[1.9, 3.2], 8).unwrap();
        assert_relative_eq!(hist.mean(), 2.0);
        assert_relative_eq!(hist.std(), 1.0);
    }

    #[test]
    fn zero_valued_samples_enter_moments_only() {
        let hist = Histogram::from_samples(&[0.0, 0.4, 2.0, 2.0], 4).unwrap();
        assert_eq!(hist.y(), &[0.0, 2.0, 0.0, 0.0]);
        assert_eq!(hist.n_dropped(), 2);
        assert_relative_eq!(hist.mean(), 1.0);
        assert_relative_eq!(hist.std(), 1.0);
    }

    #[test]
    fn out_of_range_values_enter_moments() {
        let hist = Histogram::from_samples(&[1.0, 9.0], 4).unwrap();
        assert_eq!(hist.n_dropped(), 1);
        assert_relative_eq!(hist.mean(), 5.0);
        assert_relative_eq!(hist.std(), 4.0);
    }

    #[test]
    fn default_bin_count() {
        let hist = Histogram::from_samples(&[256.0, 257.0], DEFAULT_BINS).unwrap();
        assert_eq!(hist.n_bins(), 256);
        assert_eq!(hist.y()[255], 1.0);
        assert_eq!(hist.n_dropped(), 1);
    }

    #[test]
    fn zero_bins_rejected() {
        assert_eq!(Histogram::from_samples(&[1.0], 0), Err(GammaError::NoBins));
    }

    #[test]
    fn nothing_binned_rejected() {
        assert_eq!(Histogram::from_samples(&[], 4), Err(GammaError::NoSamples));
        assert_eq!(
            Histogram::from_samples(&[0.0, 99.0], 4),
            Err(GammaError::NoSamples)
        );
    }
}
