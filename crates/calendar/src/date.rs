//! Calendar date with time of day, in the canonical `YYYY:DOY:HH:MM:SS` form.

use std::fmt;
use std::str::FromStr;

use crate::dom::{calendar_to_dom, dom_to_calendar};
use crate::error::CalendarError;
use crate::leap::year_length;

/// A day-of-year calendar date with time of day.
///
/// Always holds a day-of-year that exists in its year and a valid time of
/// day. `second` may reach 60.x to carry an inserted leap second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    year: i32,
    day_of_year: u16,
    hour: u8,
    minute: u8,
    second: f64,
}

impl CalendarDate {
    /// Creates a validated date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDayOfYear`] if the day does not exist
    /// in `year`, or [`CalendarError::InvalidTimeOfDay`] if `hour >= 24`,
    /// `minute >= 60` or `second` is outside `0.0..61.0`.
    pub fn new(
        year: i32,
        day_of_year: u16,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Result<Self, CalendarError> {
        let max = year_length(year);
        if !(1..=max).contains(&day_of_year) {
            return Err(CalendarError::InvalidDayOfYear {
                year,
                day_of_year,
                max,
            });
        }
        if hour >= 24 || minute >= 60 || !(0.0..61.0).contains(&second) {
            return Err(CalendarError::InvalidTimeOfDay {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            day_of_year,
            hour,
            minute,
            second,
        })
    }

    /// Midnight at the start of the given day of mission.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DomOutOfRange`] if `dom` is unsupported.
    pub fn from_dom(dom: i64) -> Result<Self, CalendarError> {
        let (year, day_of_year) = dom_to_calendar(dom)?;
        Ok(Self {
            year,
            day_of_year,
            hour: 0,
            minute: 0,
            second: 0.0,
        })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-based day of year.
    pub fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    /// Returns the hour (0..=23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second, including any fractional part.
    pub fn second(&self) -> f64 {
        self.second
    }

    /// Day of mission of this date (time of day is ignored).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] for years outside the
    /// mission range.
    pub fn dom(&self) -> Result<i64, CalendarError> {
        calendar_to_dom(self.year, self.day_of_year)
    }

    /// Day of year with the time of day folded in as a fraction.
    ///
    /// Day 1 at 12:00:00 is `1.5`.
    pub fn day_of_year_fractional(&self) -> f64 {
        let hour = f64::from(self.hour);
        let minute = f64::from(self.minute);
        f64::from(self.day_of_year) + (hour / 24.0 + minute / 1440.0 + self.second / 86400.0)
    }

    /// Year with the position inside it as a fraction of its length.
    ///
    /// Divides [`Self::day_of_year_fractional`] by 366 or 365 depending on
    /// the leap-year oracle.
    pub fn fractional_year(&self) -> f64 {
        let base = f64::from(year_length(self.year));
        f64::from(self.year) + self.day_of_year_fractional() / base
    }
}

impl fmt::Display for CalendarDate {
    /// Formats as `YYYY:DOY:HH:MM:SS`, dropping fractional seconds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}:{:03}:{:02}:{:02}:{:02}",
            self.year,
            self.day_of_year,
            self.hour,
            self.minute,
            self.second.trunc() as u8
        )
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses `YYYY:DOY:HH:MM:SS[.fff]`.
    ///
    /// Fractional seconds are truncated, so `2016:187:23:58:46.816` parses
    /// to 46 whole seconds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| CalendarError::MalformedDate {
            input: s.to_string(),
            reason,
        };

        let fields: Vec<&str> = s.trim().split(':').collect();
        if fields.len() != 5 {
            return Err(malformed(format!(
                "expected 5 fields, got {}",
                fields.len()
            )));
        }

        let year: i32 = fields[0]
            .parse()
            .map_err(|_| malformed(format!("invalid year {:?}", fields[0])))?;
        let day_of_year: u16 = fields[1]
            .parse()
            .map_err(|_| malformed(format!("invalid day of year {:?}", fields[1])))?;
        let hour: u8 = fields[2]
            .parse()
            .map_err(|_| malformed(format!("invalid hour {:?}", fields[2])))?;
        let minute: u8 = fields[3]
            .parse()
            .map_err(|_| malformed(format!("invalid minute {:?}", fields[3])))?;
        let whole_seconds = fields[4].split('.').next().unwrap_or_default();
        let second: u8 = whole_seconds
            .parse()
            .map_err(|_| malformed(format!("invalid second {:?}", fields[4])))?;

        Self::new(year, day_of_year, hour, minute, f64::from(second))
    }
}
