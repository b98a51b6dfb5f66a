//! Configuration for the gamma profile fit.

/// Optimizer settings for [`crate::fit_gamma_profile`].
///
/// # Example
///
/// ```
/// use mta_gamma::FitConfig;
///
/// let config = FitConfig::new().with_max_iters(500).with_restarts(1);
/// assert_eq!(config.max_iters(), 500);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    max_iters: u64,
    sd_tolerance: f64,
    restarts: usize,
    initial_step: f64,
}

impl FitConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `max_iters = 1000`, `sd_tolerance = 1e-14`, `restarts = 2`,
    /// `initial_step = 0.2`.
    pub fn new() -> Self {
        Self {
            max_iters: 1000,
            sd_tolerance: 1e-14,
            restarts: 2,
            initial_step: 0.2,
        }
    }

    /// Sets the iteration cap for each Nelder-Mead run.
    pub fn with_max_iters(mut self, n: u64) -> Self {
        self.max_iters = n;
        self
    }

    /// Sets the standard-deviation tolerance on simplex costs.
    pub fn with_sd_tolerance(mut self, tol: f64) -> Self {
        self.sd_tolerance = tol;
        self
    }

    /// Sets how many extra runs restart from the previous best point.
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    /// Sets the initial simplex edge in log-parameter space.
    pub fn with_initial_step(mut self, step: f64) -> Self {
        self.initial_step = step;
        self
    }

    /// Returns the iteration cap for each run.
    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }

    /// Returns the simplex cost tolerance.
    pub fn sd_tolerance(&self) -> f64 {
        self.sd_tolerance
    }

    /// Returns the number of restarts.
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Returns the initial simplex edge.
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = FitConfig::new();
        assert_eq!(c.max_iters(), 1000);
        assert_eq!(c.sd_tolerance(), 1e-14);
        assert_eq!(c.restarts(), 2);
        assert_eq!(c.initial_step(), 0.2);
        assert_eq!(c, FitConfig::default());
    }

    #[test]
    fn builders() {
        let c = FitConfig::new()
            .with_max_iters(10)
            .with_sd_tolerance(1e-6)
            .with_restarts(0)
            .with_initial_step(0.5);
        assert_eq!(c.max_iters(), 10);
        assert_eq!(c.sd_tolerance(), 1e-6);
        assert_eq!(c.restarts(), 0);
        assert_eq!(c.initial_step(), 0.5);
    }
}
