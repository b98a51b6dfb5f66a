//! Non-linear least-squares fit of a scaled gamma density to a histogram.
//!
//! The amplitude enters the model linearly, so for any (shape, rate) its
//! least-squares value is closed form. Nelder-Mead therefore only searches
//! the concentrated two-parameter cost over `(ln shape, ln rate)`, which
//! also keeps both parameters positive.

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::FitConfig;
use crate::profile::{GammaProfile, unit_density};

/// Why a fit fell back to the method-of-moments guess.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FallbackReason {
    /// `x` and `y` differ in length.
    #[error("x has {x_len} values but y has {y_len}")]
    LengthMismatch {
        /// Length of `x`.
        x_len: usize,
        /// Length of `y`.
        y_len: usize,
    },

    /// The histogram has no bins.
    #[error("histogram is empty")]
    EmptyData,

    /// A bin position or count is NaN or infinite.
    #[error("histogram contains non-finite values")]
    NonFiniteData,

    /// Every count is zero.
    #[error("histogram has no counts")]
    NoCounts,

    /// The moment guess is not a usable starting point.
    #[error("initial guess is not finite and positive (shape={shape}, rate={rate})")]
    InvalidInitialGuess {
        /// Guessed shape.
        shape: f64,
        /// Guessed rate.
        rate: f64,
    },

    /// The optimizer returned an error or no parameters.
    #[error("optimizer failed: {message}")]
    OptimizerFailed {
        /// Optimizer diagnostic.
        message: String,
    },

    /// The optimizer ended on non-finite or non-positive parameters.
    #[error("fit produced invalid parameters")]
    NonFiniteResult,

    /// The optimum is worse than the starting point.
    #[error("fit did not improve on the initial guess")]
    NoImprovement,
}

/// How a [`GammaFit`] was obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FitOutcome {
    /// The optimizer produced the parameters.
    Converged,
    /// The moment guess was substituted.
    FellBack {
        /// What went wrong.
        reason: FallbackReason,
    },
}

/// Result of [`fit_gamma_profile`]: always a usable parameter triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GammaFit {
    profile: GammaProfile,
    outcome: FitOutcome,
}

impl GammaFit {
    /// The fitted (or fallback) profile.
    pub fn profile(&self) -> &GammaProfile {
        &self.profile
    }

    /// How the profile was obtained.
    pub fn outcome(&self) -> &FitOutcome {
        &self.outcome
    }

    /// True if the optimizer produced the profile.
    pub fn converged(&self) -> bool {
        matches!(self.outcome, FitOutcome::Converged)
    }

    /// `(shape, rate, amplitude)`.
    pub fn params(&self) -> (f64, f64, f64) {
        (
            self.profile.shape(),
            self.profile.rate(),
            self.profile.amplitude(),
        )
    }
}

/// Fits a scaled gamma density to a binned histogram.
///
/// Starts from the method-of-moments guess built from `mean` and `std` of
/// the underlying samples (see [`GammaProfile::from_moments`]). Never fails:
/// when the fit cannot be carried out the guess is returned with
/// [`FitOutcome::FellBack`] and a warning is logged.
///
/// ```
/// use mta_gamma::{FitConfig, GammaProfile, fit_gamma_profile};
///
/// let truth = GammaProfile::new(4.0, 0.1, 5000.0);
/// let x: Vec<f64> = (1..=256).map(f64::from).collect();
/// let y: Vec<f64> = x.iter().map(|&v| truth.density(v)).collect();
///
/// let fit = fit_gamma_profile(&x, &y, 36.0, 21.0, &FitConfig::new());
/// assert!(fit.converged());
/// assert!((fit.profile().shape() - 4.0).abs() < 0.04);
/// ```
#[tracing::instrument(skip(x, y, config), fields(n_bins = y.len()))]
pub fn fit_gamma_profile(x: &[f64], y: &[f64], mean: f64, std: f64, config: &FitConfig) -> GammaFit {
    let guess = GammaProfile::from_moments(mean, std, y);
    match try_fit(x, y, &guess, config) {
        Ok(profile) => {
            debug!(
                shape = profile.shape(),
                rate = profile.rate(),
                amplitude = profile.amplitude(),
                "gamma fit converged"
            );
            GammaFit {
                profile,
                outcome: FitOutcome::Converged,
            }
        }
        Err(reason) => {
            warn!(
                %reason,
                shape = guess.shape(),
                rate = guess.rate(),
                amplitude = guess.amplitude(),
                "gamma fit failed, using moment guess"
            );
            GammaFit {
                profile: guess,
                outcome: FitOutcome::FellBack { reason },
            }
        }
    }
}

fn try_fit(
    x: &[f64],
    y: &[f64],
    guess: &GammaProfile,
    config: &FitConfig,
) -> Result<GammaProfile, FallbackReason> {
    if x.len() != y.len() {
        return Err(FallbackReason::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if y.is_empty() {
        return Err(FallbackReason::EmptyData);
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(FallbackReason::NonFiniteData);
    }
    let norm: f64 = y.iter().map(|v| v * v).sum();
    if norm <= 0.0 {
        return Err(FallbackReason::NoCounts);
    }

    let (shape0, rate0) = (guess.shape(), guess.rate());
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !positive(shape0) || !positive(rate0) {
        return Err(FallbackReason::InvalidInitialGuess {
            shape: shape0,
            rate: rate0,
        });
    }

    let cost = ProfileCost { x, y, norm };
    let start = vec![shape0.ln(), rate0.ln()];
    let initial_cost = cost.evaluate(&start);
    if initial_cost >= f64::MAX {
        return Err(FallbackReason::InvalidInitialGuess {
            shape: shape0,
            rate: rate0,
        });
    }

    let mut best = start;
    for _ in 0..=config.restarts() {
        best = nelder_mead(cost, &best, config)?;
    }

    if best.iter().any(|v| !v.is_finite()) {
        return Err(FallbackReason::NonFiniteResult);
    }
    let final_cost = cost.evaluate(&best);
    if final_cost > initial_cost {
        return Err(FallbackReason::NoImprovement);
    }

    let (shape, rate) = (best[0].exp(), best[1].exp());
    let amplitude = cost
        .amplitude(shape, rate)
        .ok_or(FallbackReason::NonFiniteResult)?;
    let profile = GammaProfile::new(shape, rate, amplitude);
    if !profile.is_valid() {
        return Err(FallbackReason::NonFiniteResult);
    }
    debug!(initial_cost, final_cost, "relative residual");
    Ok(profile)
}

/// One Nelder-Mead run from `start` with a fresh simplex.
fn nelder_mead(
    cost: ProfileCost<'_>,
    start: &[f64],
    config: &FitConfig,
) -> Result<Vec<f64>, FallbackReason> {
    let failed = |e: argmin::core::Error| FallbackReason::OptimizerFailed {
        message: e.to_string(),
    };

    let mut simplex = Vec::with_capacity(start.len() + 1);
    simplex.push(start.to_vec());
    for i in 0..start.len() {
        let mut vertex = start.to_vec();
        vertex[i] += config.initial_step();
        simplex.push(vertex);
    }

    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(config.sd_tolerance())
        .map_err(failed)?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(config.max_iters()))
        .run()
        .map_err(failed)?;

    result
        .state()
        .best_param
        .clone()
        .ok_or_else(|| FallbackReason::OptimizerFailed {
            message: "no best parameters".to_string(),
        })
}

/// Residual sum of squares relative to `Σy²`, with the amplitude solved
/// for in closed form.
#[derive(Clone, Copy)]
struct ProfileCost<'a> {
    x: &'a [f64],
    y: &'a [f64],
    norm: f64,
}

impl ProfileCost<'_> {
    /// Least-squares amplitude `Σ y·g / Σ g²` for unit-amplitude density `g`.
    fn amplitude(&self, shape: f64, rate: f64) -> Option<f64> {
        let mut num = 0.0;
        let mut den = 0.0;
        for (&x, &y) in self.x.iter().zip(self.y) {
            let g = unit_density(shape, rate, x);
            num += y * g;
            den += g * g;
        }
        let amplitude = num / den;
        (den > 0.0 && amplitude.is_finite()).then_some(amplitude)
    }

    /// Cost at log-parameters; `f64::MAX` where the model is undefined.
    fn evaluate(&self, log_params: &[f64]) -> f64 {
        let (shape, rate) = (log_params[0].exp(), log_params[1].exp());
        let Some(amplitude) = self.amplitude(shape, rate) else {
            return f64::MAX;
        };
        let rss: f64 = self
            .x
            .iter()
            .zip(self.y)
            .map(|(&x, &y)| (amplitude * unit_density(shape, rate, x) - y).powi(2))
            .sum();
        let relative = rss / self.norm;
        if relative.is_finite() { relative } else { f64::MAX }
    }
}

impl CostFunction for ProfileCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        Ok(self.evaluate(params))
    }
}
