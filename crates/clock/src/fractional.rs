//! Bridges from mission-clock seconds to calendar representations.
//!
//! Each function asks the clock for the canonical date string, parses it into
//! a [`CalendarDate`] and finishes with pure calendar arithmetic. Clock
//! failures propagate unchanged.

use mta_calendar::CalendarDate;
use tracing::debug;

use crate::clock::MissionClock;
use crate::error::ClockError;

/// Calendar date (whole seconds) for mission-clock seconds.
pub fn to_calendar_date<C: MissionClock + ?Sized>(
    clock: &C,
    secs: f64,
) -> Result<CalendarDate, ClockError> {
    let date: CalendarDate = clock.date_string(secs)?.parse()?;
    Ok(date)
}

/// Fractional year for mission-clock seconds.
///
/// ```
/// use mta_clock::{ChandraClock, to_fractional_year};
///
/// let fyear = to_fractional_year(&ChandraClock, 584150395.0).unwrap();
/// assert!((fyear - 2016.5136588620724).abs() < 1e-9);
/// ```
pub fn to_fractional_year<C: MissionClock + ?Sized>(clock: &C, secs: f64) -> Result<f64, ClockError> {
    let date = to_calendar_date(clock, secs)?;
    let fyear = date.fractional_year();
    debug!(secs, %date, fyear, "fractional year");
    Ok(fyear)
}

/// Day of year, with the time of day as a fraction, for mission-clock seconds.
pub fn to_day_of_year_fractional<C: MissionClock + ?Sized>(
    clock: &C,
    secs: f64,
) -> Result<f64, ClockError> {
    let date = to_calendar_date(clock, secs)?;
    Ok(date.day_of_year_fractional())
}

/// Day of mission for mission-clock seconds.
pub fn to_dom<C: MissionClock + ?Sized>(clock: &C, secs: f64) -> Result<i64, ClockError> {
    let date = to_calendar_date(clock, secs)?;
    Ok(date.dom()?)
}
