//! Western (Gregorian) Easter computus.
//!
//! Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher), which is
//! exact for every year of the Gregorian calendar.

use hd_core::errors::{Error, Result};

use crate::date::{Date, MAX_YEAR};

/// First year the Gregorian computus applies to.
pub const FIRST_GREGORIAN_EASTER: i32 = 1583;

/// Return Easter Sunday for `year`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] for years before 1583 (the Gregorian
/// tables do not apply) or beyond the representable date range.
pub fn easter_sunday(year: i32) -> Result<Date> {
    if !(FIRST_GREGORIAN_EASTER..=MAX_YEAR).contains(&year) {
        return Err(Error::InvalidArgument(format!(
            "Gregorian Easter is defined for years [{FIRST_GREGORIAN_EASTER}, {MAX_YEAR}], got {year}"
        )));
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        assert_eq!(easter_sunday(2016).unwrap(), date(2016, 3, 27));
        assert_eq!(easter_sunday(2019).unwrap(), date(2019, 4, 21));
        assert_eq!(easter_sunday(2023).unwrap(), date(2023, 4, 9));
        assert_eq!(easter_sunday(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025).unwrap(), date(2025, 4, 20));
        // Extremes of the March 22 – April 25 window
        assert_eq!(easter_sunday(1818).unwrap(), date(1818, 3, 22));
        assert_eq!(easter_sunday(1943).unwrap(), date(1943, 4, 25));
    }

    #[test]
    fn always_a_sunday() {
        for y in 1583..=2500 {
            assert_eq!(easter_sunday(y).unwrap().weekday(), Weekday::Sunday, "year {y}");
        }
    }

    #[test]
    fn rejects_julian_years() {
        assert!(matches!(easter_sunday(1582), Err(Error::InvalidArgument(_))));
        assert!(matches!(easter_sunday(10_000), Err(Error::InvalidArgument(_))));
    }
}
