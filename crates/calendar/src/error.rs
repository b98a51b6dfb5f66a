//! Error types for the mta-calendar crate.

/// Error type for all fallible operations in the mta-calendar crate.
///
/// Leap-year and fractional-year arithmetic is total; only range checks on
/// years, days of year, DOM values and time-of-day fields can fail, plus
/// parsing of the canonical `YYYY:DOY:HH:MM:SS` string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year lies outside the supported mission range.
    #[error("year {year} outside supported range {min}..={max}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// Returned when a day-of-year value does not exist in the given year.
    #[error("invalid day of year: {day_of_year} for year {year} (must be 1..={max})")]
    InvalidDayOfYear {
        /// Year the day was checked against.
        year: i32,
        /// The invalid day-of-year value.
        day_of_year: u16,
        /// Length of that year (365 or 366).
        max: u16,
    },

    /// Returned when a day-of-mission value lies outside the supported range.
    #[error("day of mission {dom} outside supported range {min}..={max}")]
    DomOutOfRange {
        /// The rejected DOM.
        dom: i64,
        /// First supported DOM.
        min: i64,
        /// Last supported DOM.
        max: i64,
    },

    /// Returned when an hour, minute or second field is out of range.
    #[error("invalid time of day: {hour:02}:{minute:02}:{second}")]
    InvalidTimeOfDay {
        /// Hour field.
        hour: u8,
        /// Minute field.
        minute: u8,
        /// Second field.
        second: f64,
    },

    /// Returned when a string is not in `YYYY:DOY:HH:MM:SS` form.
    #[error("malformed date string {input:?}: {reason}")]
    MalformedDate {
        /// The offending input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_year_out_of_range() {
        let err = CalendarError::YearOutOfRange {
            year: 1998,
            min: 1999,
            max: 2499,
        };
        assert_eq!(
            err.to_string(),
            "year 1998 outside supported range 1999..=2499"
        );
    }

    #[test]
    fn error_invalid_day_of_year() {
        let err = CalendarError::InvalidDayOfYear {
            year: 2019,
            day_of_year: 366,
            max: 365,
        };
        assert_eq!(
            err.to_string(),
            "invalid day of year: 366 for year 2019 (must be 1..=365)"
        );
    }

    #[test]
    fn error_dom_out_of_range() {
        let err = CalendarError::DomOutOfRange {
            dom: -500,
            min: -201,
            max: 182_785,
        };
        assert_eq!(
            err.to_string(),
            "day of mission -500 outside supported range -201..=182785"
        );
    }

    #[test]
    fn error_invalid_time_of_day() {
        let err = CalendarError::InvalidTimeOfDay {
            hour: 24,
            minute: 5,
            second: 0.0,
        };
        assert_eq!(err.to_string(), "invalid time of day: 24:05:0");
    }

    #[test]
    fn error_malformed_date() {
        let err = CalendarError::MalformedDate {
            input: "2019:184".to_string(),
            reason: "expected 5 fields, got 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed date string \"2019:184\": expected 5 fields, got 2"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
