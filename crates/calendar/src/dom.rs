//! Day-of-mission (DOM) arithmetic.
//!
//! DOM 0 is 1999 day-of-year 202 (1999-07-21). Days before it within 1999
//! have negative DOMs.

use std::ops::RangeInclusive;

use tracing::trace;

use crate::error::CalendarError;
use crate::leap::{is_leap, year_length};

/// Year of the mission epoch.
pub const EPOCH_YEAR: i32 = 1999;

/// Day-of-year of the mission epoch within [`EPOCH_YEAR`].
pub const EPOCH_DAY_OF_YEAR: u16 = 202;

/// Last year the converters accept.
///
/// 2500 is the next year divisible by 4 that the oracle rejects and that is
/// missing from [`SKIPPED_LEAP_YEARS`].
pub const MAX_YEAR: i32 = 2499;

/// Years divisible by 4 that are nevertheless common years.
///
/// The closed-form DOM formula counts one leap day per four-year block;
/// each entry removes that day for every later year. Extending [`MAX_YEAR`]
/// means appending the next such year here.
pub const SKIPPED_LEAP_YEARS: &[i32] = &[2100, 2200, 2300];

/// Days from 2000-01-01 back to the epoch, minus one (`366 - 202 - 1`).
const DAYS_EPOCH_TO_2000: i64 = 163;

/// Supported DOM interval: 1999:001 through [`MAX_YEAR`]:365.
pub fn dom_range() -> RangeInclusive<i64> {
    let first = 1 - i64::from(EPOCH_DAY_OF_YEAR);
    let last = forward(MAX_YEAR, year_length(MAX_YEAR));
    first..=last
}

/// Converts a (year, day-of-year) pair into a day of mission.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] for years before the epoch
/// year or after [`MAX_YEAR`], and [`CalendarError::InvalidDayOfYear`] if
/// `day_of_year` does not exist in `year`.
///
/// ```
/// use mta_calendar::calendar_to_dom;
///
/// assert_eq!(calendar_to_dom(1999, 202).unwrap(), 0);
/// assert_eq!(calendar_to_dom(2012, 1).unwrap(), 4547);
/// ```
pub fn calendar_to_dom(year: i32, day_of_year: u16) -> Result<i64, CalendarError> {
    if !(EPOCH_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange {
            year,
            min: EPOCH_YEAR,
            max: MAX_YEAR,
        });
    }
    let max = year_length(year);
    if !(1..=max).contains(&day_of_year) {
        return Err(CalendarError::InvalidDayOfYear {
            year,
            day_of_year,
            max,
        });
    }
    Ok(forward(year, day_of_year))
}

/// Closed-form DOM for an already validated date.
fn forward(year: i32, day_of_year: u16) -> i64 {
    let doy = i64::from(day_of_year);
    if year == EPOCH_YEAR {
        return doy - i64::from(EPOCH_DAY_OF_YEAR);
    }

    let elapsed = i64::from(year - 2000);
    // Leap days in 2000..year, counted once per four-year block since 1997.
    let leap_days = i64::from(year - 1997) / 4 - skipped_leap_days(year);
    doy + DAYS_EPOCH_TO_2000 + elapsed * 365 + leap_days
}

/// Number of [`SKIPPED_LEAP_YEARS`] entries strictly before `year`.
fn skipped_leap_days(year: i32) -> i64 {
    let n = SKIPPED_LEAP_YEARS.iter().filter(|&&y| y < year).count() as i64;
    if n > 0 {
        trace!(year, correction = -n, "applying skipped leap-year correction");
    }
    n
}

/// Converts a day of mission into a (year, day-of-year) pair.
///
/// Walks forward from the epoch year one year at a time, using the leap-year
/// oracle for each year's length.
///
/// # Errors
///
/// Returns [`CalendarError::DomOutOfRange`] if `dom` falls outside
/// [`dom_range`].
///
/// ```
/// use mta_calendar::dom_to_calendar;
///
/// assert_eq!(dom_to_calendar(7175).unwrap(), (2019, 72));
/// ```
pub fn dom_to_calendar(dom: i64) -> Result<(i32, u16), CalendarError> {
    let range = dom_range();
    if !range.contains(&dom) {
        return Err(CalendarError::DomOutOfRange {
            dom,
            min: *range.start(),
            max: *range.end(),
        });
    }

    let mut remaining = dom + i64::from(EPOCH_DAY_OF_YEAR);
    let mut year = EPOCH_YEAR;
    loop {
        let base = if is_leap(year) { 366 } else { 365 };
        remaining -= base;
        if remaining < 0 {
            // Range check above keeps this in 1..=366.
            return Ok((year, (remaining + base) as u16));
        }
        year += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_zero() {
        assert_eq!(calendar_to_dom(1999, 202).unwrap(), 0);
        assert_eq!(dom_to_calendar(0).unwrap(), (1999, 202));
    }

    #[test]
    fn known_fixtures() {
        assert_eq!(calendar_to_dom(2012, 1).unwrap(), 4547);
        assert_eq!(calendar_to_dom(2019, 202).unwrap(), 7305);
        assert_eq!(dom_to_calendar(7175).unwrap(), (2019, 72));
    }

    #[test]
    fn days_before_epoch_in_1999_are_negative() {
        assert_eq!(calendar_to_dom(1999, 1).unwrap(), -201);
        assert_eq!(calendar_to_dom(1999, 201).unwrap(), -1);
        assert_eq!(dom_to_calendar(-201).unwrap(), (1999, 1));
        assert_eq!(dom_to_calendar(-1).unwrap(), (1999, 201));
    }

    #[test]
    fn year_boundaries() {
        assert_eq!(calendar_to_dom(1999, 365).unwrap(), 163);
        assert_eq!(calendar_to_dom(2000, 1).unwrap(), 164);
        assert_eq!(calendar_to_dom(2000, 366).unwrap(), 529);
        assert_eq!(calendar_to_dom(2001, 1).unwrap(), 530);
        assert_eq!(dom_to_calendar(163).unwrap(), (1999, 365));
        assert_eq!(dom_to_calendar(164).unwrap(), (2000, 1));
        assert_eq!(dom_to_calendar(529).unwrap(), (2000, 366));
    }

    #[test]
    fn year_2101_correction() {
        // 2100 is skipped, so 2100:365 and 2101:001 are adjacent.
        let last_2100 = calendar_to_dom(2100, 365).unwrap();
        let first_2101 = calendar_to_dom(2101, 1).unwrap();
        assert_eq!(first_2101, last_2100 + 1);
        assert_eq!(first_2101, 37054);
        assert_eq!(dom_to_calendar(first_2101).unwrap(), (2101, 1));
    }

    #[test]
    fn correction_persists_after_2101() {
        let dom = calendar_to_dom(2102, 60).unwrap();
        assert_eq!(dom, 37478);
        assert_eq!(dom_to_calendar(dom).unwrap(), (2102, 60));
    }

    #[test]
    fn skipped_table_matches_oracle() {
        for &year in SKIPPED_LEAP_YEARS {
            assert_eq!(year % 4, 0, "{year} is not divisible by 4");
            assert!(!is_leap(year), "{year} is a leap year");
        }
        for year in EPOCH_YEAR..=MAX_YEAR {
            if year % 4 == 0 && !is_leap(year) {
                assert!(
                    SKIPPED_LEAP_YEARS.contains(&year),
                    "{year} missing from SKIPPED_LEAP_YEARS"
                );
            }
        }
    }

    #[test]
    fn pre_epoch_year_rejected() {
        assert_eq!(
            calendar_to_dom(1998, 100).unwrap_err(),
            CalendarError::YearOutOfRange {
                year: 1998,
                min: 1999,
                max: 2499,
            }
        );
    }

    #[test]
    fn year_past_max_rejected() {
        assert!(matches!(
            calendar_to_dom(2500, 1),
            Err(CalendarError::YearOutOfRange { year: 2500, .. })
        ));
    }

    #[test]
    fn invalid_day_of_year_rejected() {
        assert_eq!(
            calendar_to_dom(2019, 366).unwrap_err(),
            CalendarError::InvalidDayOfYear {
                year: 2019,
                day_of_year: 366,
                max: 365,
            }
        );
        assert!(calendar_to_dom(2020, 366).is_ok());
        assert!(matches!(
            calendar_to_dom(2020, 0),
            Err(CalendarError::InvalidDayOfYear { .. })
        ));
    }

    #[test]
    fn dom_range_bounds() {
        let range = dom_range();
        assert_eq!(*range.start(), -201);
        assert_eq!(*range.end(), 182_785);
        assert_eq!(dom_to_calendar(*range.end()).unwrap(), (2499, 365));
    }

    #[test]
    fn dom_out_of_range_rejected() {
        assert_eq!(
            dom_to_calendar(-202).unwrap_err(),
            CalendarError::DomOutOfRange {
                dom: -202,
                min: -201,
                max: 182_785,
            }
        );
        assert!(matches!(
            dom_to_calendar(182_786),
            Err(CalendarError::DomOutOfRange { .. })
        ));
    }

    #[test]
    fn dom_is_consecutive_across_leap_day() {
        let feb_28 = calendar_to_dom(2016, 59).unwrap();
        let feb_29 = calendar_to_dom(2016, 60).unwrap();
        let mar_1 = calendar_to_dom(2016, 61).unwrap();
        assert_eq!(feb_29, feb_28 + 1);
        assert_eq!(mar_1, feb_29 + 1);
    }
}
