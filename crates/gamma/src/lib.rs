//! # mta-gamma
//!
//! Fits a scaled gamma density to a binned count histogram by non-linear
//! least squares (Nelder-Mead), with an explicit, logged fallback to the
//! method-of-moments guess.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     S["samples"] -->|"Histogram::from_samples"| H["Histogram (x, y, mean, std)"]
//!     H -->|"GammaProfile::from_moments"| G["initial guess"]
//!     H -->|"fit_gamma_profile"| F["GammaFit"]
//!     G --> F
//!     F --> C["Converged"]
//!     F --> B["FellBack(reason) + warn!"]
//!     F -->|"fit_and_plot"| P["ProfilePlotter"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use mta_gamma::{FitConfig, Histogram, fit_gamma_profile};
//!
//! let samples: Vec<f64> = (0..2000).map(|i| 20.0 + f64::from(i % 41)).collect();
//! let hist = Histogram::from_samples(&samples, 256).unwrap();
//! let fit = fit_gamma_profile(hist.x(), hist.y(), hist.mean(), hist.std(), &FitConfig::new());
//! assert!(fit.profile().shape() > 0.0);
//! ```
//!
//! ## Model
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | α | [`GammaProfile::shape()`] | Shape |
//! | β | [`GammaProfile::rate()`] | Rate (inverse scale) |
//! | A | [`GammaProfile::amplitude()`] | Area under the scaled density |
//!
//! `density(x) = A · x^(α−1) · e^(−βx) · β^α / Γ(α)`

mod config;
mod error;
mod fit;
mod histogram;
mod plot;
mod profile;

pub use config::FitConfig;
pub use error::GammaError;
pub use fit::{FallbackReason, FitOutcome, GammaFit, fit_gamma_profile};
pub use histogram::{DEFAULT_BINS, Histogram};
pub use plot::{PlotLabels, PlotRequest, ProfilePlotter, fit_and_plot};
pub use profile::GammaProfile;
