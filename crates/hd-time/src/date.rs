//! Proleptic Gregorian dates.
//!
//! A [`Date`] is a day count where 0001-01-01 is day 1 (a Monday), the same
//! numbering as `chrono::NaiveDate::num_days_from_ce`.  Years 1 through 9999
//! are representable; every operation that could leave that range is checked.

use std::str::FromStr;

use hd_core::errors::{Error, Result};
use hd_core::utilities::parse_iso_date;

use crate::month::Month;
use crate::weekday::Weekday;

/// A single day, stored as its day count.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

/// Smallest representable year.
pub const MIN_YEAR: i32 = 1;

/// Largest representable year.
pub const MAX_YEAR: i32 = 9999;

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Date for a raw day count in `Date::MIN..=Date::MAX`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Date from numeric components, validated against the month length.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from year, [`Month`], and day-of-month.
    pub fn new(year: i32, month: Month, day: u8) -> Result<Self> {
        Self::from_ymd(year, month.number(), day)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Day count, 1 being 0001-01-01.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Calendar month.
    pub fn month(&self) -> Month {
        let m = ymd_from_serial(self.0).1;
        Month::from_number(m).unwrap_or(Month::January)
    }

    /// Day within the month, from 1.
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Ordinal day, January 1 being `1`.
    pub fn day_of_year(&self) -> u16 {
        let year = self.year();
        (self.0 - serial_from_ymd(year, 1, 1) + 1) as u16
    }

    /// Day of the week; day 1 was a Monday.
    pub fn weekday(&self) -> Weekday {
        match (self.0 - 1).rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Checked `self + n` days.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).ok_or_else(|| {
            Error::Date(format!("date arithmetic: {self} + {n} days overflows"))
        })?;
        Self::from_serial(serial)
            .map_err(|_| Error::Date(format!("date arithmetic: {self} + {n} days out of range")))
    }

    /// Checked `self + 7n` days.
    pub fn add_weeks(self, n: i32) -> Result<Self> {
        let days = n
            .checked_mul(7)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {n} weeks overflows")))?;
        self.add_days(days)
    }

    /// `other - self` in days.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Last day of this date's month.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Whether this is the last day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// The latest date on or before `self` that falls on `weekday`.
    pub fn weekday_on_or_before(self, weekday: Weekday) -> Result<Self> {
        let back = weekday.days_until(self.weekday());
        self.add_days(-i32::from(back))
    }

    /// The earliest date on or after `self` that falls on `weekday`.
    pub fn weekday_on_or_after(self, weekday: Weekday) -> Result<Self> {
        let ahead = self.weekday().days_until(weekday);
        self.add_days(i32::from(ahead))
    }

    /// The `n`-th `weekday` of a month, counting from 1.
    ///
    /// `nth_weekday(4, Weekday::Thursday, 2024, Month::November)` is
    /// Thanksgiving 2024, 2024-11-28.  `InvalidArgument` when `n` is zero or
    /// the month has fewer than `n` such weekdays.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: Month) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidArgument("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::new(year, month, 1)?.weekday_on_or_after(weekday)?;
        let day = u32::from(first.day_of_month()) + 7 * (u32::from(n) - 1);
        if day > u32::from(month.length(year)) {
            return Err(Error::InvalidArgument(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year:04}-{:02}",
                month.number()
            )));
        }
        Date::new(year, month, day as u8)
    }

    /// The final `weekday` of a month, as used for Memorial Day.
    pub fn last_weekday(weekday: Weekday, year: i32, month: Month) -> Result<Self> {
        Date::new(year, month, month.length(year))?.weekday_on_or_before(weekday)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result leaves the valid range; use [`Date::add_days`]
    /// for a checked version.
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result leaves the valid range.
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

// ── Formatting and parsing ────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    /// ISO 8601 (`YYYY-MM-DD`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)
            .ok_or_else(|| Error::InvalidArgument(format!("'{s}' is not a YYYY-MM-DD date")))?;
        Date::from_ymd(y, m, d)
    }
}

impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(date: Date) -> Self {
        // chrono's range is a strict superset of [Date::MIN, Date::MAX].
        chrono::NaiveDate::from_num_days_from_ce_opt(date.0).unwrap_or(chrono::NaiveDate::MIN)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_serial(date.num_days_from_ce())
    }
}

// ── Gregorian arithmetic ──────────────────────────────────────────────────────

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of month `month` (1-based) in `year`.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i32 = 146_097;

/// Offset between day 0 of the March-based count and serial 1.
const MARCH_EPOCH_SHIFT: i32 = 305;

/// Day count for a (year, month, day) triple.
///
/// Years are counted from March so that the leap day falls at the end.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let m = i32::from(month);
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let year_of_era = y - era * 400;
    let month_from_march = (m + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + i32::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - MARCH_EPOCH_SHIFT
}

/// Inverse of [`serial_from_ymd`].
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial + MARCH_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
    let month = if month_from_march < 10 {
        month_from_march + 3
    } else {
        month_from_march - 9
    };
    let year = year_of_era + era * 400 + i32::from(month <= 2);
    (year, month as u8, day as u8)
}
