//! Seam for rendering a fit against its histogram.
//!
//! Rendering itself lives outside this crate; callers supply a
//! [`ProfilePlotter`].

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::config::FitConfig;
use crate::error::GammaError;
use crate::fit::{GammaFit, fit_gamma_profile};
use crate::profile::GammaProfile;

/// Renders a fitted profile over histogram counts.
pub trait ProfilePlotter {
    /// Error produced by the renderer.
    type Error: Display;

    /// Produces the image described by `request`.
    fn plot(&self, request: &PlotRequest<'_>) -> Result<(), Self::Error>;
}

/// Everything a plotter needs for one figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest<'a> {
    /// Bin positions.
    pub x: &'a [f64],
    /// Counts per bin.
    pub y: &'a [f64],
    /// Fitted profile.
    pub profile: &'a GammaProfile,
    /// Profile sampled at integer positions over the bin range.
    pub curve: Vec<(f64, f64)>,
    /// Figure title.
    pub title: &'a str,
    /// X axis label.
    pub x_label: &'a str,
    /// Y axis label.
    pub y_label: &'a str,
    /// Image file to write.
    pub output: &'a Path,
}

/// Title, axis labels and output path for [`fit_and_plot`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLabels {
    title: String,
    x_label: String,
    y_label: String,
    output: PathBuf,
}

impl Default for PlotLabels {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            output: PathBuf::from("out.png"),
        }
    }
}

impl PlotLabels {
    /// Empty labels and `out.png`. An empty title disables plotting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set both axis labels.
    pub fn with_axes(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Figure title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Output path.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// Fits the histogram and, when `labels` carries a title, plots the result.
///
/// # Errors
///
/// [`GammaError::Plot`] if the plotter fails. The fit itself always yields
/// a profile.
pub fn fit_and_plot<P: ProfilePlotter>(
    x: &[f64],
    y: &[f64],
    mean: f64,
    std: f64,
    config: &FitConfig,
    labels: &PlotLabels,
    plotter: &P,
) -> Result<GammaFit, GammaError> {
    let fit = fit_gamma_profile(x, y, mean, std, config);
    if labels.title.is_empty() {
        return Ok(fit);
    }

    let x_max = x.iter().copied().fold(0.0, f64::max).ceil() as usize + 1;
    let request = PlotRequest {
        x,
        y,
        profile: fit.profile(),
        curve: fit.profile().curve(x_max),
        title: &labels.title,
        x_label: &labels.x_label,
        y_label: &labels.y_label,
        output: &labels.output,
    };
    plotter.plot(&request).map_err(|e| GammaError::Plot {
        message: e.to_string(),
    })?;
    Ok(fit)
}
