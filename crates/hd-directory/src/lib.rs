//! # hd-directory
//!
//! Directory records kept alongside the holiday calendar: a friends list,
//! per-team attributes, and per-team opening hours.  Each directory works
//! over a [`RecordStore`]; [`MemoryStore`] is the bundled implementation.
//!
//! ```rust
//! use hd_directory::TeamSchedules;
//! use hd_holidays::thanksgiving;
//! use hd_time::{ClockTime, Date};
//! use serde_json::json;
//!
//! let schedules = TeamSchedules::in_memory();
//! schedules
//!     .create_hours(&json!({
//!         "team": "ops", "type": "phone", "day": "Thursday",
//!         "start": "08:00", "end": "17:00",
//!     }))
//!     .unwrap();
//!
//! let noon: ClockTime = "12:00".parse().unwrap();
//! let holidays = thanksgiving(2024).unwrap();
//! let thursday = Date::from_ymd(2024, 11, 21).unwrap();
//! let thanksgiving_day = Date::from_ymd(2024, 11, 28).unwrap();
//! assert!(schedules.is_open("ops", "phone", thursday, noon, &holidays).unwrap());
//! assert!(!schedules.is_open("ops", "phone", thanksgiving_day, noon, &holidays).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Team attributes.
pub mod attribute;

/// Friends directory.
pub mod friend;

/// Team opening hours.
pub mod schedule;

/// `RecordStore` trait and the in-memory store.
pub mod store;

mod payload;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use attribute::{AttributeEntry, AttributeValue, TeamAttribute, TeamAttributes};
pub use friend::{Friend, FriendDirectory};
pub use schedule::{HoursSlot, ScheduleEntry, TeamSchedules};
pub use store::{MemoryStore, Record, RecordStore};
