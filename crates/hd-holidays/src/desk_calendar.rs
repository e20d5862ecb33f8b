//! Help-desk business-day calendar.
//!
//! Wraps a resolved [`HolidayCalendar`] so the generic [`Calendar`]
//! machinery (adjustment conventions, business-day counting) can answer
//! questions such as "when does the desk reopen after Thanksgiving?".

use hd_time::{Calendar, Date};

use crate::calendar::HolidayCalendar;

/// A calendar closed on weekends and on every date of a holiday calendar.
#[derive(Debug, Clone)]
pub struct DeskCalendar {
    name: String,
    holidays: HolidayCalendar,
}

impl DeskCalendar {
    /// Create a desk calendar from a name and a set of holidays.
    pub fn new(name: impl Into<String>, holidays: HolidayCalendar) -> Self {
        Self {
            name: name.into(),
            holidays,
        }
    }

    /// The holidays this calendar closes on.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }
}

impl Calendar for DeskCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::HolidayResolver;
    use hd_time::BusinessDayConvention;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn desk_reopens_monday_after_thanksgiving() {
        let cal = HolidayResolver::new().business_calendar(2024).unwrap();
        // Thanksgiving 2024-11-28, day after 2024-11-29, weekend, reopen 12-02
        assert_eq!(
            cal.adjust(date(2024, 11, 28), BusinessDayConvention::Following).unwrap(),
            date(2024, 12, 2)
        );
        assert_eq!(cal.name(), "Help Desk 2024");
    }

    #[test]
    fn winter_window_has_no_business_days() {
        let cal = HolidayResolver::new().business_calendar(2024).unwrap();
        // Dec 23, 2024 (Mon) open; Dec 24 – Jan 1 closed; Jan 2, 2025 (Thu) open
        assert!(cal.is_business_day(date(2024, 12, 23)));
        assert_eq!(cal.business_days_between(date(2024, 12, 23), date(2025, 1, 1)), 0);
        assert!(cal.is_business_day(date(2025, 1, 2)));
    }

    #[test]
    fn new_year_of_the_calendar_year_is_closed() {
        let cal = HolidayResolver::new().business_calendar(2024).unwrap();
        // 2024-01-01 is a Monday, closed by the 2023 winter window
        assert!(!cal.is_business_day(date(2024, 1, 1)));
        assert_eq!(
            cal.holidays().get(date(2024, 1, 1)).as_deref(),
            Some("New Year's Celebration")
        );
        assert_eq!(
            cal.adjust(date(2024, 1, 1), BusinessDayConvention::Following).unwrap(),
            date(2024, 1, 2)
        );
        // Fri 2023-12-29 to Tue 2024-01-02: only the Tuesday counts
        assert_eq!(cal.business_days_between(date(2023, 12, 29), date(2024, 1, 2)), 1);
    }

    #[test]
    fn bridged_january_monday_is_closed() {
        // Jan 1 2022 is a Saturday; the 2021 window bridges to Monday Jan 3
        let cal = HolidayResolver::new().business_calendar(2022).unwrap();
        assert!(!cal.is_business_day(date(2022, 1, 3)));
        assert!(cal.is_business_day(date(2022, 1, 4)));
        assert_eq!(
            cal.advance_business_days(date(2021, 12, 31), 1).unwrap(),
            date(2022, 1, 4)
        );
    }

    #[test]
    fn first_resolvable_year_has_no_carry_over() {
        let cal = HolidayResolver::new().business_calendar(1583).unwrap();
        assert!(cal.holidays().dates().all(|d| d.year() >= 1583));
        assert_eq!(cal.holidays(), &HolidayResolver::new().all_holidays(1583).unwrap());
    }
}
