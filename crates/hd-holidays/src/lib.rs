//! # hd-holidays
//!
//! Holiday rules and the resolver that turns them into a year's calendar.
//!
//! ```rust
//! use hd_holidays::{independence_day, memorial_day};
//!
//! // July 4, 2021 is a Sunday, observed on Monday the 5th.
//! let july = independence_day(2021).unwrap();
//! assert_eq!(july.to_json_string().unwrap(), r#"{"2021-07-05":"4th of July"}"#);
//!
//! // May 31, 2020 is a Sunday, so Memorial Day is May 25.
//! let may = memorial_day(2020).unwrap();
//! assert_eq!(may.to_json_string().unwrap(), r#"{"2020-05-25":"Memorial Day"}"#);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar`: resolved date → label(s) mapping.
pub mod calendar;

/// Business-day calendar backed by resolved holidays.
pub mod desk_calendar;

/// `HolidayResolver` and default-settings shorthands.
pub mod resolver;

/// `HolidayRule` and `RuleKind`.
pub mod rule;

/// The standard help-desk holiday groups.
pub mod standard;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, LABEL_SEPARATOR};
pub use desk_calendar::DeskCalendar;
pub use resolver::{
    all_holidays, easter_and_good_friday, independence_day, memorial_day, thanksgiving,
    winter_celebration, HolidayResolver,
};
pub use rule::{Direction, HolidayRule, Occurrence, RuleKind};
pub use standard::{standard_rules, HolidayGroup};
