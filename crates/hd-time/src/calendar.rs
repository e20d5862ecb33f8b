//! Working-day calendars.
//!
//! Anything that can say whether the desk works on a given date gets
//! rolling, counting and listing for free.  Every walk is range-checked and
//! reports an error at the ends of the date range.

use hd_core::errors::Result;
use hd_core::{ensure, fail};

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;

/// Longest run of consecutive holidays `step_to_business_day` will walk.
pub const MAX_HOLIDAY_RUN: i32 = 366;

/// Which days the desk works.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Display name, used in log lines and error messages.
    fn name(&self) -> &str;

    /// Whether the desk works on `date`.
    fn is_business_day(&self, date: Date) -> bool;

    /// Negation of [`is_business_day`](Self::is_business_day).
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Saturday and Sunday unless overridden.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Roll `date` onto a working day using `convention`.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        use BusinessDayConvention::*;

        // Roll one way; fall back to the other way if the month changes.
        let within_month = |first: i32| -> Result<Date> {
            let rolled = self.step_to_business_day(date, first)?;
            if rolled.month() == date.month() {
                Ok(rolled)
            } else {
                self.step_to_business_day(date, -first)
            }
        };

        match convention {
            Unadjusted => Ok(date),
            Following => self.step_to_business_day(date, 1),
            Preceding => self.step_to_business_day(date, -1),
            ModifiedFollowing => within_month(1),
            ModifiedPreceding => within_month(-1),
            Nearest if self.is_business_day(date) => Ok(date),
            Nearest => {
                let later = self.step_to_business_day(date, 1)?;
                let earlier = self.step_to_business_day(date, -1)?;
                Ok(if later - date <= date - earlier { later } else { earlier })
            }
        }
    }

    /// Walk from `date` in steps of `step` days until a business day is found.
    ///
    /// # Errors
    /// `Precondition` if `step` is zero, `Runtime` if no business day turns
    /// up within [`MAX_HOLIDAY_RUN`] steps.
    fn step_to_business_day(&self, date: Date, step: i32) -> Result<Date> {
        ensure!(step != 0, "business-day step must be non-zero");
        let mut current = date;
        for _ in 0..=MAX_HOLIDAY_RUN {
            if self.is_business_day(current) {
                return Ok(current);
            }
            current = current.add_days(step)?;
        }
        fail!("{}: no business day within {MAX_HOLIDAY_RUN} steps of {date}", self.name());
    }

    /// Move `n` working days from `date`; negative `n` moves backwards.
    fn advance_business_days(&self, mut date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Working days in `(d1, d2]`, negated when `d2` comes first.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let sign = if d2 >= d1 { 1 } else { -1 };
        let (start, end) = if d2 >= d1 { (d1, d2) } else { (d2, d1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|serial| Date::from_serial(serial).ok())
            .filter(|&d| self.is_business_day(d))
            .count() as i32;
        sign * count
    }

    /// Non-weekend holidays in the inclusive range `[from, to]`.
    fn holiday_list(&self, from: Date, to: Date) -> Vec<Date> {
        (from.serial()..=to.serial())
            .filter_map(|serial| Date::from_serial(serial).ok())
            .filter(|&d| self.is_holiday(d) && !self.is_weekend(d))
            .collect()
    }
}

/// Closed on weekends, open every other day.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
