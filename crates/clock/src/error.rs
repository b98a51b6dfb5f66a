//! Error types for the mta-clock crate.

use mta_calendar::CalendarError;

/// Error type for all fallible operations in the mta-clock crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClockError {
    /// Calendar arithmetic error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when a date string cannot be parsed.
    #[error("malformed time string {input:?}: {reason}")]
    MalformedTimeString {
        /// The offending input.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Returned when mission-clock seconds are NaN or infinite.
    #[error("mission-clock seconds must be finite, got {secs}")]
    NonFiniteSeconds {
        /// The rejected value.
        secs: f64,
    },

    /// Returned when mission-clock seconds fall outside the representable date range.
    #[error("mission-clock seconds {secs} outside the representable date range")]
    OutOfRange {
        /// The rejected value.
        secs: f64,
    },

    /// Returned when a strftime pattern cannot be rendered.
    #[error("invalid date format pattern {pattern:?}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
    },
}
