//! Time and calendar commands.

use anyhow::{Context, Result};
use tracing::info;

use mta_calendar::{calendar_to_dom, dom_to_calendar};
use mta_clock::{
    ChandraClock, DateFormat, DateValue, convert_date_format, to_day_of_year_fractional,
    to_fractional_year,
};

use crate::cli::{CalendarArgs, ConvertArgs, DomArgs, SecondsArgs};

/// Print the day of mission for a year and day of year.
pub fn dom(args: DomArgs) -> Result<()> {
    let dom = calendar_to_dom(args.year, args.day_of_year).with_context(|| {
        format!(
            "cannot convert {}:{:03} to day of mission",
            args.year, args.day_of_year
        )
    })?;
    println!("{dom}");
    Ok(())
}

/// Print `YYYY:DDD` for a day of mission.
pub fn calendar(args: CalendarArgs) -> Result<()> {
    let (year, doy) = dom_to_calendar(args.dom)
        .with_context(|| format!("cannot convert day of mission {}", args.dom))?;
    println!("{year:04}:{doy:03}");
    Ok(())
}

/// Print the fractional year for mission-clock seconds.
pub fn fyear(args: SecondsArgs) -> Result<()> {
    let fyear = to_fractional_year(&ChandraClock, args.secs)
        .with_context(|| format!("cannot convert {} mission seconds", args.secs))?;
    println!("{fyear}");
    Ok(())
}

/// Print the fractional day of year for mission-clock seconds.
pub fn yday(args: SecondsArgs) -> Result<()> {
    let yday = to_day_of_year_fractional(&ChandraClock, args.secs)
        .with_context(|| format!("cannot convert {} mission seconds", args.secs))?;
    println!("{yday}");
    Ok(())
}

/// Print a date converted between formats.
pub fn convert(args: ConvertArgs) -> Result<()> {
    let input = DateFormat::parse(&args.from);
    let output = DateFormat::parse(&args.to);
    info!(value = %args.value, ?input, ?output, "converting date");
    let converted = convert_date_format(
        &ChandraClock,
        &DateValue::Text(args.value.clone()),
        &input,
        &output,
    )
    .with_context(|| format!("cannot convert {:?} from {} to {}", args.value, args.from, args.to))?;
    println!("{converted}");
    Ok(())
}
