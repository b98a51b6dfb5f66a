//! Date format conversion between strftime patterns and mission-clock seconds.

use std::fmt::{self, Write};

use chrono::{NaiveDate, NaiveDateTime};

use crate::chandra::CANONICAL_PATTERN;
use crate::clock::MissionClock;
use crate::error::ClockError;

/// A date representation accepted or produced by [`convert_date_format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    /// Mission-clock seconds.
    MissionSeconds,
    /// A strftime pattern such as `%Y-%m-%dT%H:%M:%S`.
    Pattern(String),
}

impl DateFormat {
    /// `YYYY:DOY:HH:MM:SS`.
    pub fn day_of_year() -> Self {
        Self::Pattern(CANONICAL_PATTERN.to_string())
    }

    /// `YYYY-MM-DDTHH:MM:SS`.
    pub fn iso() -> Self {
        Self::Pattern("%Y-%m-%dT%H:%M:%S".to_string())
    }

    /// Parses a format name: `chandra`/`secs` for mission seconds, `doy`,
    /// `iso`, or a literal strftime pattern.
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "chandra" | "secs" | "seconds" => Self::MissionSeconds,
            "doy" | "ydate" => Self::day_of_year(),
            "iso" => Self::iso(),
            _ => Self::Pattern(name.to_string()),
        }
    }

    fn is_day_of_year(&self) -> bool {
        matches!(self, Self::Pattern(p) if p == CANONICAL_PATTERN)
    }
}

/// A date value: either mission-clock seconds or formatted text.
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    /// Mission-clock seconds.
    Seconds(f64),
    /// Formatted date text.
    Text(String),
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(secs) => write!(f, "{secs}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Converts a date between formats.
///
/// Seconds, or numeric text read with [`DateFormat::MissionSeconds`] or the
/// day-of-year pattern, are first turned into a date by the clock. Output in
/// [`DateFormat::MissionSeconds`] goes back through the clock. Fractional
/// seconds reported by the clock are dropped.
///
/// ```
/// use mta_clock::{ChandraClock, DateFormat, DateValue, convert_date_format};
///
/// let out = convert_date_format(
///     &ChandraClock,
///     &DateValue::Text("2019:184:00:43:32".into()),
///     &DateFormat::day_of_year(),
///     &DateFormat::iso(),
/// )
/// .unwrap();
/// assert_eq!(out, DateValue::Text("2019-07-03T00:43:32".into()));
/// ```
pub fn convert_date_format<C: MissionClock + ?Sized>(
    clock: &C,
    value: &DateValue,
    input: &DateFormat,
    output: &DateFormat,
) -> Result<DateValue, ClockError> {
    let date = match value {
        DateValue::Seconds(secs) => from_seconds(clock, *secs)?,
        DateValue::Text(text) => {
            let numeric = text.trim().parse::<f64>().ok();
            match (input, numeric) {
                (DateFormat::MissionSeconds, Some(secs)) => from_seconds(clock, secs)?,
                (DateFormat::MissionSeconds, None) => {
                    return Err(ClockError::MalformedTimeString {
                        input: text.clone(),
                        reason: "expected mission-clock seconds".to_string(),
                    });
                }
                (other, Some(secs)) if other.is_day_of_year() => from_seconds(clock, secs)?,
                (DateFormat::Pattern(pattern), _) => parse_with_pattern(text, pattern)?,
            }
        }
    };

    match output {
        DateFormat::MissionSeconds => {
            let canonical = render(&date, CANONICAL_PATTERN)?;
            Ok(DateValue::Seconds(clock.seconds(&canonical)?))
        }
        DateFormat::Pattern(pattern) => Ok(DateValue::Text(render(&date, pattern)?)),
    }
}

fn from_seconds<C: MissionClock + ?Sized>(
    clock: &C,
    secs: f64,
) -> Result<NaiveDateTime, ClockError> {
    let text = clock.date_string(secs)?;
    let whole = text.split('.').next().unwrap_or_default();
    parse_with_pattern(whole, CANONICAL_PATTERN)
}

/// Parses with a full date-time pattern, falling back to date-only patterns
/// at midnight.
fn parse_with_pattern(text: &str, pattern: &str) -> Result<NaiveDateTime, ClockError> {
    let text = text.trim();
    match NaiveDateTime::parse_from_str(text, pattern) {
        Ok(date) => Ok(date),
        Err(full_err) => NaiveDate::parse_from_str(text, pattern)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| ClockError::MalformedTimeString {
                input: text.to_string(),
                reason: format!("does not match {pattern:?}: {full_err}"),
            }),
    }
}

fn render(date: &NaiveDateTime, pattern: &str) -> Result<String, ClockError> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).map_err(|_| ClockError::InvalidPattern {
        pattern: pattern.to_string(),
    })?;
    Ok(out)
}
