//! # mta-calendar
//!
//! Pure calendar arithmetic for the mission: leap years, day of mission
//! (DOM) and fractional years.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["is_leap(year)"] --> B["calendar_to_dom(year, doy)"]
//!     A --> C["dom_to_calendar(dom)"]
//!     B <-->|"bijection"| C
//!     D["CalendarDate (YYYY:DOY:HH:MM:SS)"] -->|".fractional_year()"| E["f64"]
//!     D -->|".dom()"| B
//!     A --> E
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use mta_calendar::{CalendarDate, calendar_to_dom, dom_to_calendar, is_leap};
//!
//! assert!(is_leap(2000));
//! assert_eq!(calendar_to_dom(2019, 202).unwrap(), 7305);
//! assert_eq!(dom_to_calendar(7175).unwrap(), (2019, 72));
//!
//! let date: CalendarDate = "2016:187:23:58:46".parse().unwrap();
//! assert!((date.fractional_year() - 2016.5136588620724).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `leap` | Leap-year oracle |
//! | `dom` | Day-of-mission conversions and the skipped-leap-year table |
//! | `date` | Calendar date with time of day, fractional-year arithmetic |
//! | `error` | Error types |

mod date;
mod dom;
mod error;
mod leap;

pub use date::CalendarDate;
pub use dom::{
    EPOCH_DAY_OF_YEAR, EPOCH_YEAR, MAX_YEAR, SKIPPED_LEAP_YEARS, calendar_to_dom, dom_range,
    dom_to_calendar,
};
pub use error::CalendarError;
pub use leap::{is_leap, year_length};
