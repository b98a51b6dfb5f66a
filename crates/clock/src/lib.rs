//! # mta-clock
//!
//! Mission-clock seconds, the calendar strings they stand for, and the
//! fractional-year, day-of-year and DOM views derived from them.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["mission-clock seconds"] -->|"MissionClock::date_string"| B["YYYY:DOY:HH:MM:SS"]
//!     B -->|"MissionClock::seconds"| A
//!     B -->|"parse"| C["CalendarDate"]
//!     C --> D["to_fractional_year"]
//!     C --> E["to_day_of_year_fractional"]
//!     C --> F["to_dom"]
//!     B --> G["convert_date_format"]
//! ```
//!
//! [`MissionClock`] is the seam: the bridges accept any implementation, and
//! [`ChandraClock`] is the one used in operations.
//!
//! ## Quick Start
//!
//! ```
//! use mta_clock::{ChandraClock, MissionClock, to_dom, to_fractional_year};
//!
//! let clock = ChandraClock;
//! assert_eq!(clock.date_string(584150395.0).unwrap(), "2016:187:23:58:46");
//! let fyear = to_fractional_year(&clock, 584150395.0).unwrap();
//! assert!((fyear - 2016.5136588620724).abs() < 1e-9);
//! assert_eq!(to_dom(&clock, 584150395.0).unwrap(), 6194);
//! ```

mod chandra;
mod clock;
mod error;
mod format;
mod fractional;
mod leap_seconds;

pub use chandra::ChandraClock;
pub use clock::MissionClock;
pub use error::ClockError;
pub use format::{DateFormat, DateValue, convert_date_format};
pub use fractional::{to_calendar_date, to_day_of_year_fractional, to_dom, to_fractional_year};
