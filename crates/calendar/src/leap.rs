//! Leap-year oracle.

/// Returns `true` if `year` has 366 days.
///
/// Divisible by 4 makes a leap year, divisible by 100 reverts that, and
/// divisible by 400 makes it a leap year again regardless of the century
/// rule.
///
/// ```
/// use mta_calendar::is_leap;
///
/// assert!(is_leap(2000));
/// assert!(!is_leap(2100));
/// ```
pub fn is_leap(year: i32) -> bool {
    let mut leap = false;
    if year % 4 == 0 {
        leap = true;
        if year % 100 == 0 {
            leap = false;
        }
    }
    if year % 400 == 0 {
        leap = true;
    }
    leap
}

/// Number of days in `year` (366 for leap years, 365 otherwise).
pub fn year_length(year: i32) -> u16 {
    if is_leap(year) { 366 } else { 365 }
}
