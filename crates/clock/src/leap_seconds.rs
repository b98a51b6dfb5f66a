//! TAI−UTC offsets since the start of the integer leap-second era.

use chrono::{Datelike, NaiveDateTime};

/// `(year, month, TAI−UTC seconds)` effective from the first of that month.
const TAI_UTC_OFFSETS: [(i32, u32, f64); 28] = [
    (1972, 1, 10.0),
    (1972, 7, 11.0),
    (1973, 1, 12.0),
    (1974, 1, 13.0),
    (1975, 1, 14.0),
    (1976, 1, 15.0),
    (1977, 1, 16.0),
    (1978, 1, 17.0),
    (1979, 1, 18.0),
    (1980, 1, 19.0),
    (1981, 7, 20.0),
    (1982, 7, 21.0),
    (1983, 7, 22.0),
    (1985, 7, 23.0),
    (1988, 1, 24.0),
    (1990, 1, 25.0),
    (1991, 1, 26.0),
    (1992, 7, 27.0),
    (1993, 7, 28.0),
    (1994, 7, 29.0),
    (1996, 1, 30.0),
    (1997, 7, 31.0),
    (1999, 1, 32.0),
    (2006, 1, 33.0),
    (2009, 1, 34.0),
    (2012, 7, 35.0),
    (2015, 7, 36.0),
    (2017, 1, 37.0),
];

/// TAI−UTC in seconds at the given UTC instant.
///
/// Instants before 1972 use the 1972 value.
pub(crate) fn tai_minus_utc(utc: &NaiveDateTime) -> f64 {
    let key = 12 * utc.year() + utc.month() as i32;
    let i = match TAI_UTC_OFFSETS
        .binary_search_by(|&(year, month, _)| (12 * year + month as i32).cmp(&key))
    {
        Ok(idx) => idx,
        Err(0) => 0,
        Err(idx) => idx - 1,
    };
    TAI_UTC_OFFSETS[i].2
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn table_is_sorted_and_increasing() {
        for w in TAI_UTC_OFFSETS.windows(2) {
            let a = 12 * w[0].0 + w[0].1 as i32;
            let b = 12 * w[1].0 + w[1].1 as i32;
            assert!(a < b);
            assert_eq!(w[1].2 - w[0].2, 1.0);
        }
    }

    #[test]
    fn offset_at_mission_epochs() {
        assert_eq!(tai_minus_utc(&at(1998, 1, 1)), 31.0);
        assert_eq!(tai_minus_utc(&at(1999, 7, 21)), 32.0);
        assert_eq!(tai_minus_utc(&at(2019, 7, 3)), 37.0);
    }

    #[test]
    fn offset_changes_on_step_date() {
        assert_eq!(tai_minus_utc(&at(2016, 12, 31)), 36.0);
        assert_eq!(tai_minus_utc(&at(2017, 1, 1)), 37.0);
        assert_eq!(tai_minus_utc(&at(2012, 6, 30)), 34.0);
        assert_eq!(tai_minus_utc(&at(2012, 7, 1)), 35.0);
    }

    #[test]
    fn before_table_clamps_to_first_entry() {
        assert_eq!(tai_minus_utc(&at(1960, 1, 1)), 10.0);
    }
}
