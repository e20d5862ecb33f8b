//! Holiday rules.
//!
//! A [`HolidayRule`] pairs a label with a [`RuleKind`] describing how to
//! find its date(s) in a given year.  Rules are plain immutable values; the
//! same rule evaluated for the same year always yields the same dates.

use hd_core::errors::{Error, Result};
use hd_time::{easter_sunday, BusinessDayConvention, Calendar, Date, Month, Weekday, WeekendsOnly};

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occurrence {
    /// The *n*-th occurrence, counting from 1.
    Nth(u8),
    /// The last occurrence in the month.
    Last,
}

/// Direction in which a weekend bridge extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards earlier dates.
    Backward,
    /// Towards later dates.
    Forward,
}

impl Direction {
    fn step(self) -> i32 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// How a holiday's date is determined within a year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// The same calendar day every year.
    Fixed {
        /// Month of the holiday.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// A floating holiday such as "fourth Thursday of November".
    NthWeekday {
        /// Month of the holiday.
        month: Month,
        /// Weekday the holiday falls on.
        weekday: Weekday,
        /// Which occurrence of `weekday` in `month`.
        occurrence: Occurrence,
    },
    /// Western Easter Sunday.
    Easter,
    /// Another rule's date(s) shifted by a number of days.
    RelativeTo {
        /// The rule the offset is measured from.
        base: Box<RuleKind>,
        /// Days to add (negative for earlier).
        offset_days: i32,
    },
    /// Another rule's date(s) moved off the weekend by a business-day
    /// convention applied on a weekends-only calendar.
    Observed {
        /// The nominal holiday.
        base: Box<RuleKind>,
        /// How to move a weekend date.
        convention: BusinessDayConvention,
    },
    /// When the anchor falls on a weekend, the days stepping away from it in
    /// `direction` up to and including the first weekday.  Empty when the
    /// anchor is itself a weekday.
    WeekendBridge {
        /// The date the bridge starts from (not itself included).
        anchor: Box<RuleKind>,
        /// Which way the bridge extends.
        direction: Direction,
    },
}

impl RuleKind {
    /// Fixed calendar day.
    pub fn fixed(month: Month, day: u8) -> Self {
        RuleKind::Fixed { month, day }
    }

    /// *n*-th `weekday` of `month`.
    pub fn nth_weekday(n: u8, weekday: Weekday, month: Month) -> Self {
        RuleKind::NthWeekday {
            month,
            weekday,
            occurrence: Occurrence::Nth(n),
        }
    }

    /// Last `weekday` of `month`.
    pub fn last_weekday(weekday: Weekday, month: Month) -> Self {
        RuleKind::NthWeekday {
            month,
            weekday,
            occurrence: Occurrence::Last,
        }
    }

    /// This rule shifted by `offset_days`.
    pub fn offset(self, offset_days: i32) -> Self {
        RuleKind::RelativeTo {
            base: Box::new(self),
            offset_days,
        }
    }

    /// This rule moved to the nearest weekday when it falls on a weekend.
    pub fn observed(self) -> Self {
        RuleKind::Observed {
            base: Box::new(self),
            convention: BusinessDayConvention::Nearest,
        }
    }

    /// The weekend bridge extending from this rule in `direction`.
    pub fn weekend_bridge(self, direction: Direction) -> Self {
        RuleKind::WeekendBridge {
            anchor: Box::new(self),
            direction,
        }
    }

    /// Resolve the date(s) this kind produces in `year`, in ascending order
    /// of discovery.
    ///
    /// # Errors
    /// Propagates date-range errors and rejects occurrences that do not exist
    /// (e.g. a fifth Monday in a four-Monday month).
    pub fn dates(&self, year: i32) -> Result<Vec<Date>> {
        match self {
            RuleKind::Fixed { month, day } => Ok(vec![Date::new(year, *month, *day)?]),
            RuleKind::NthWeekday {
                month,
                weekday,
                occurrence,
            } => {
                let date = match occurrence {
                    Occurrence::Nth(n) => Date::nth_weekday(*n, *weekday, year, *month)?,
                    Occurrence::Last => Date::last_weekday(*weekday, year, *month)?,
                };
                Ok(vec![date])
            }
            RuleKind::Easter => Ok(vec![easter_sunday(year)?]),
            RuleKind::RelativeTo { base, offset_days } => base
                .dates(year)?
                .into_iter()
                .map(|d| d.add_days(*offset_days))
                .collect(),
            RuleKind::Observed { base, convention } => base
                .dates(year)?
                .into_iter()
                .map(|d| WeekendsOnly.adjust(d, *convention))
                .collect(),
            RuleKind::WeekendBridge { anchor, direction } => {
                let mut bridged = Vec::new();
                for start in anchor.dates(year)? {
                    if !start.weekday().is_weekend() {
                        continue;
                    }
                    let mut d = start;
                    loop {
                        d = d.add_days(direction.step())?;
                        bridged.push(d);
                        if !d.weekday().is_weekend() {
                            break;
                        }
                    }
                }
                Ok(bridged)
            }
        }
    }
}

/// A labelled holiday rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HolidayRule {
    label: String,
    kind: RuleKind,
    year_offset: i32,
}

impl HolidayRule {
    /// Create a rule resolved in the requested year.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for an empty label.
    pub fn new(label: impl Into<String>, kind: RuleKind) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(Error::InvalidArgument("holiday label must not be empty".into()));
        }
        Ok(Self {
            label,
            kind,
            year_offset: 0,
        })
    }

    /// Resolve this rule `offset` years after the requested year.
    pub fn in_year_offset(mut self, offset: i32) -> Self {
        self.year_offset = offset;
        self
    }

    /// The label attached to every date this rule produces.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The rule kind.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Years between the requested year and the year this rule is evaluated in.
    pub fn year_offset(&self) -> i32 {
        self.year_offset
    }

    /// Resolve the date(s) of this holiday for the calendar of `year`.
    pub fn dates(&self, year: i32) -> Result<Vec<Date>> {
        let target = year.checked_add(self.year_offset).ok_or_else(|| {
            Error::InvalidArgument(format!("year {year} + {} overflows", self.year_offset))
        })?;
        self.kind.dates(target)
    }
}
