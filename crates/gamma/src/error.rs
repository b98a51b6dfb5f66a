//! Error types for the mta-gamma crate.

/// Error type for the fallible operations in the mta-gamma crate.
///
/// The fit itself never fails (it falls back to the moment guess, see
/// [`crate::FitOutcome`]); only histogram construction and plotting do.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GammaError {
    /// Returned when a histogram is requested with zero bins.
    #[error("histogram needs at least one bin")]
    NoBins,

    /// Returned when no sample falls inside the bins.
    #[error("no samples fall inside the bins")]
    NoSamples,

    /// Returned when the plotting collaborator fails.
    #[error("plotting failed: {message}")]
    Plot {
        /// The collaborator's error message.
        message: String,
    },
}
