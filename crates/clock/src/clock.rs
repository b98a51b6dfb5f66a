//! The time-conversion collaborator contract.

use crate::error::ClockError;

/// Bidirectional conversion between mission-clock seconds and the canonical
/// `YYYY:DOY:HH:MM:SS` date string.
///
/// Everything the engine knows about absolute mission time goes through this
/// trait; the fractional-year and DOM bridges never look at the seconds
/// value themselves.
pub trait MissionClock {
    /// Canonical `YYYY:DOY:HH:MM:SS` string for `secs`, whole seconds only.
    fn date_string(&self, secs: f64) -> Result<String, ClockError>;

    /// Mission-clock seconds for a date string.
    fn seconds(&self, date: &str) -> Result<f64, ClockError>;
}

impl<C: MissionClock + ?Sized> MissionClock for &C {
    fn date_string(&self, secs: f64) -> Result<String, ClockError> {
        (**self).date_string(secs)
    }

    fn seconds(&self, date: &str) -> Result<f64, ClockError> {
        (**self).seconds(date)
    }
}
