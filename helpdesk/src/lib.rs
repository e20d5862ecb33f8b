//! # helpdesk
//!
//! Holiday calendars, opening hours, and directory records for a help desk.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `hd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! helpdesk = "0.1"
//! ```
//!
//! ```rust
//! use helpdesk::holidays::HolidayResolver;
//! use helpdesk::time::{BusinessDayConvention, Calendar, Date};
//!
//! let resolver = HolidayResolver::new();
//! let holidays = resolver.all_holidays(2024).unwrap();
//! assert_eq!(holidays.len(), 15);
//!
//! // First business day after the Thanksgiving weekend.
//! let desk = resolver.business_calendar(2024).unwrap();
//! let thanksgiving = Date::from_ymd(2024, 11, 28).unwrap();
//! let reopens = desk.adjust(thanksgiving, BusinessDayConvention::Following).unwrap();
//! assert_eq!(reopens.to_string(), "2024-12-02");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and resolver settings.
pub use hd_core as core;

/// Date, clock-time, weekday, and business-day calendar types.
pub use hd_time as time;

/// Holiday rules and the holiday resolver.
pub use hd_holidays as holidays;

/// Friends, team attributes, and team schedules.
pub use hd_directory as directory;
