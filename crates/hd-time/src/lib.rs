//! # hd-time
//!
//! Date, time-of-day, weekday, month, Easter, and business-day calendar
//! types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// `ClockTime`: time of day.
pub mod clock_time;

/// `Date` type.
pub mod date;

/// Gregorian Easter computus.
pub mod easter;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, WeekendsOnly};
pub use clock_time::ClockTime;
pub use date::Date;
pub use easter::easter_sunday;
pub use month::Month;
pub use weekday::Weekday;
