//! Calendar months.

use std::fmt;
use std::str::FromStr;

use hd_core::errors::{Error, Result};

/// A calendar month. The discriminant is the month's number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// Months in calendar order, each with its English name.
const TABLE: [(Month, &str); 12] = [
    (Month::January, "January"),
    (Month::February, "February"),
    (Month::March, "March"),
    (Month::April, "April"),
    (Month::May, "May"),
    (Month::June, "June"),
    (Month::July, "July"),
    (Month::August, "August"),
    (Month::September, "September"),
    (Month::October, "October"),
    (Month::November, "November"),
    (Month::December, "December"),
];

impl Month {
    /// `1` is January; anything outside `1..=12` yields `None`.
    pub fn from_number(n: u8) -> Option<Self> {
        let slot = usize::from(n).checked_sub(1)?;
        TABLE.get(slot).map(|&(m, _)| m)
    }

    /// Month number, January being `1`.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Days in this month for the given proleptic Gregorian year.
    pub fn length(self, year: i32) -> u8 {
        crate::date::days_in_month(year, self.number())
    }

    /// `"January"` through `"December"`.
    pub fn long_name(self) -> &'static str {
        TABLE[usize::from(self.number()) - 1].1
    }

    /// First three letters of [`long_name`](Self::long_name).
    pub fn short_name(self) -> &'static str {
        &self.long_name()[..3]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

impl FromStr for Month {
    type Err = Error;

    /// Full or three-letter English name, any case.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        TABLE
            .iter()
            .find(|(_, name)| {
                name.eq_ignore_ascii_case(s) || (s.len() == 3 && name[..3].eq_ignore_ascii_case(s))
            })
            .map(|&(m, _)| m)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown month: {s:?}")))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> u8 {
        month.number()
    }
}
