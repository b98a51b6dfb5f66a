//! Chandra mission clock: SI seconds since 1998-01-01T00:00:00 TT.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use tracing::debug;

use crate::clock::MissionClock;
use crate::error::ClockError;
use crate::leap_seconds::tai_minus_utc;

/// TT − TAI in seconds.
const TT_MINUS_TAI: f64 = 32.184;

/// Output pattern of [`ChandraClock::date_string`].
pub(crate) const CANONICAL_PATTERN: &str = "%Y:%j:%H:%M:%S";

/// Patterns accepted by [`ChandraClock::seconds`], tried in order.
const INPUT_PATTERNS: [&str; 2] = ["%Y:%j:%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// The Chandra mission clock.
///
/// Mission-clock seconds are SI seconds elapsed since 1998-01-01T00:00:00 TT.
/// Conversion to UTC subtracts TT−TAI and the leap-second table.
///
/// ```
/// use mta_clock::{ChandraClock, MissionClock};
///
/// let clock = ChandraClock;
/// assert_eq!(clock.date_string(584150395.0).unwrap(), "2016:187:23:58:46");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChandraClock;

/// 1998-01-01T00:00:00 UTC; leap-free UTC offsets are counted from here.
fn utc_reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1998, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("1998-01-01T00:00:00 is a valid date")
}

/// UTC instant `offset` leap-free seconds after the reference, rounded to ms.
fn utc_at(offset: f64) -> Option<NaiveDateTime> {
    let millis = (offset * 1000.0).round();
    if !(i64::MIN as f64..i64::MAX as f64).contains(&millis) {
        return None;
    }
    let delta = TimeDelta::try_milliseconds(millis as i64)?;
    utc_reference().checked_add_signed(delta)
}

/// `23:59:60.x` for the `23:59:59.x` instant preceding a positive leap second.
/// An instant that millisecond rounding already carried past midnight is
/// returned unchanged.
fn inserted_second(before: NaiveDateTime) -> NaiveDateTime {
    let time = before.time();
    if (time.hour(), time.minute(), time.second()) != (23, 59, 59) {
        return before;
    }
    before
        .date()
        .and_hms_nano_opt(23, 59, 59, 1_000_000_000 + time.nanosecond())
        .unwrap_or(before)
}

impl ChandraClock {
    /// UTC instant for mission-clock seconds, rounded to milliseconds.
    ///
    /// Instants inside an inserted leap second come back as chrono's
    /// `23:59:59` plus a second of nanoseconds, which formats as `23:59:60`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::NonFiniteSeconds`] for NaN or infinite input
    /// and [`ClockError::OutOfRange`] when the instant cannot be represented.
    pub fn utc(&self, secs: f64) -> Result<NaiveDateTime, ClockError> {
        if !secs.is_finite() {
            return Err(ClockError::NonFiniteSeconds { secs });
        }
        let at = |offset: f64| utc_at(offset).ok_or(ClockError::OutOfRange { secs });
        let tai = secs - TT_MINUS_TAI;

        // Look for the TAI−UTC value that agrees with the UTC instant it gives.
        let mut dtai = tai_minus_utc(&at(tai - 32.0)?);
        let mut previous = f64::NAN;
        for _ in 0..3 {
            let utc = at(tai - dtai)?;
            let actual = tai_minus_utc(&utc);
            if actual == dtai {
                return Ok(utc);
            }
            if actual == previous {
                // Neither side of a step agrees: tai is inside an inserted second.
                return Ok(inserted_second(at(tai - dtai.max(actual))?));
            }
            previous = dtai;
            dtai = actual;
        }
        Err(ClockError::OutOfRange { secs })
    }

    /// Mission-clock seconds for a UTC instant.
    pub fn seconds_at(&self, utc: &NaiveDateTime) -> f64 {
        let delta = *utc - utc_reference();
        let offset = delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9;
        offset + TT_MINUS_TAI + tai_minus_utc(utc)
    }
}

impl MissionClock for ChandraClock {
    fn date_string(&self, secs: f64) -> Result<String, ClockError> {
        let utc = self.utc(secs)?;
        let date = utc.format(CANONICAL_PATTERN).to_string();
        debug!(secs, %date, "mission clock to date");
        Ok(date)
    }

    fn seconds(&self, date: &str) -> Result<f64, ClockError> {
        let trimmed = date.trim();
        let mut last_err = None;
        for pattern in INPUT_PATTERNS {
            match NaiveDateTime::parse_from_str(trimmed, pattern) {
                Ok(utc) => {
                    let secs = self.seconds_at(&utc);
                    debug!(date = trimmed, secs, "date to mission clock");
                    return Ok(secs);
                }
                Err(e) => last_err = Some(e),
            }
        }
        Err(ClockError::MalformedTimeString {
            input: date.to_string(),
            reason: last_err.map(|e| e.to_string()).unwrap_or_default(),
        })
    }
}
