//! Scaled gamma density.

use serde::Serialize;
use statrs::function::gamma::ln_gamma;

/// Three-parameter scaled gamma density
/// `amplitude * x^(shape-1) * exp(-x*rate) * rate^shape / Γ(shape)`.
///
/// Shape and rate follow the rate convention, so the underlying
/// distribution has mean `shape / rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GammaProfile {
    shape: f64,
    rate: f64,
    amplitude: f64,
}

impl GammaProfile {
    /// Creates a profile from raw parameters. No validation is applied so a
    /// degenerate moment guess can still be represented.
    pub fn new(shape: f64, rate: f64, amplitude: f64) -> Self {
        Self {
            shape,
            rate,
            amplitude,
        }
    }

    /// Method-of-moments guess from sample statistics and the histogram peak.
    ///
    /// - shape = (mean / std)²
    /// - rate = mean / std²
    /// - amplitude = max(y)
    pub fn from_moments(mean: f64, std: f64, y: &[f64]) -> Self {
        let shape = (mean / std).powi(2);
        let rate = mean / (std * std);
        let amplitude = y.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let amplitude = if amplitude.is_finite() { amplitude } else { 0.0 };
        Self::new(shape, rate, amplitude)
    }

    /// Shape parameter (α).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Rate parameter (β).
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Amplitude (area under the curve).
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Mean of the underlying distribution (shape / rate).
    pub fn mean(&self) -> f64 {
        self.shape / self.rate
    }

    /// Standard deviation of the underlying distribution (√shape / rate).
    pub fn sigma(&self) -> f64 {
        self.shape.sqrt() / self.rate
    }

    /// True if every parameter is finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        [self.shape, self.rate, self.amplitude]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }

    /// Density at `x`. Zero for negative `x`.
    pub fn density(&self, x: f64) -> f64 {
        self.amplitude * unit_density(self.shape, self.rate, x)
    }

    /// `(x, density(x))` for integer `x` in `0..x_max`, for overlaying the
    /// fit on a histogram.
    pub fn curve(&self, x_max: usize) -> Vec<(f64, f64)> {
        (0..x_max)
            .map(|v| {
                let x = v as f64;
                (x, self.density(x))
            })
            .collect()
    }
}

/// Gamma probability density with unit amplitude.
pub(crate) fn unit_density(shape: f64, rate: f64, x: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    if x == 0.0 {
        return match shape.partial_cmp(&1.0) {
            Some(std::cmp::Ordering::Greater) => 0.0,
            Some(std::cmp::Ordering::Equal) => rate,
            _ => f64::INFINITY,
        };
    }
    ((shape - 1.0) * x.ln() - x * rate + shape * rate.ln() - ln_gamma(shape)).exp()
}
