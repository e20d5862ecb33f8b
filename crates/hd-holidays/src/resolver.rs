//! `HolidayResolver`: turns holiday rules into a year's calendar.
//!
//! The resolver holds only its [`ResolverSettings`]; the year is always an
//! explicit argument.  Every method is a pure function of `(settings, year)`,
//! so a single resolver can be shared freely between threads.

use hd_core::errors::Result;
use hd_core::ResolverSettings;

use crate::calendar::HolidayCalendar;
use crate::desk_calendar::DeskCalendar;
use crate::rule::HolidayRule;
use crate::standard::HolidayGroup;

/// Resolves holiday rules for a given year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HolidayResolver {
    settings: ResolverSettings,
}

impl HolidayResolver {
    /// A resolver with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver with the given settings.
    ///
    /// # Errors
    /// Returns `Error::Config` if the settings are inconsistent.
    pub fn with_settings(settings: ResolverSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// The active settings.
    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Resolve an arbitrary rule set for `year`.
    ///
    /// Rules are applied in slice order; collisions follow the configured
    /// policy.
    ///
    /// # Errors
    /// `InvalidArgument` if `year` is outside the supported range, plus any
    /// error a rule or the collision policy raises.
    pub fn resolve_rules(&self, year: i32, rules: &[HolidayRule]) -> Result<HolidayCalendar> {
        self.settings.check_year(year)?;
        let mut calendar = HolidayCalendar::new();
        for rule in rules {
            for date in rule.dates(year)? {
                calendar.insert(date, rule.label(), self.settings.collision_policy)?;
            }
        }
        Ok(calendar)
    }

    /// Resolve one standard group for `year`.
    pub fn group(&self, year: i32, group: HolidayGroup) -> Result<HolidayCalendar> {
        let calendar = self.resolve_rules(year, &group.rules()?)?;
        tracing::trace!(year, %group, entries = calendar.len(), "resolved holiday group");
        Ok(calendar)
    }

    /// Easter Sunday and Good Friday.
    pub fn easter_and_good_friday(&self, year: i32) -> Result<HolidayCalendar> {
        self.group(year, HolidayGroup::Easter)
    }

    /// Memorial Day: the last Monday of May.
    pub fn memorial_day(&self, year: i32) -> Result<HolidayCalendar> {
        self.group(year, HolidayGroup::MemorialDay)
    }

    /// July 4, observed on the nearest weekday.
    pub fn independence_day(&self, year: i32) -> Result<HolidayCalendar> {
        self.group(year, HolidayGroup::IndependenceDay)
    }

    /// Thanksgiving (fourth Thursday of November) and the day after.
    pub fn thanksgiving(&self, year: i32) -> Result<HolidayCalendar> {
        self.group(year, HolidayGroup::Thanksgiving)
    }

    /// The Christmas / New Year window starting December 24 of `year` and
    /// ending January 1 of `year + 1`, widened across adjacent weekends.
    pub fn winter_celebration(&self, year: i32) -> Result<HolidayCalendar> {
        self.group(year, HolidayGroup::WinterCelebration)
    }

    /// Union of all five standard groups, merged in order under the
    /// configured collision policy.
    pub fn all_holidays(&self, year: i32) -> Result<HolidayCalendar> {
        let mut calendar = HolidayCalendar::new();
        for group in HolidayGroup::ALL {
            calendar.merge(self.group(year, group)?, self.settings.collision_policy)?;
        }
        tracing::debug!(
            year,
            entries = calendar.len(),
            policy = %self.settings.collision_policy,
            "resolved holiday calendar"
        );
        Ok(calendar)
    }

    /// A business-day calendar closed on weekends and on every holiday
    /// resolved for `year`.
    ///
    /// The previous year's winter window reaches into January of `year`, so
    /// those dates are carried over when `year - 1` is itself resolvable.
    pub fn business_calendar(&self, year: i32) -> Result<DeskCalendar> {
        let mut holidays = self.all_holidays(year)?;
        if let Some(previous) = year.checked_sub(1) {
            if self.settings.check_year(previous).is_ok() {
                let spill = self.winter_celebration(previous)?;
                for (date, labels) in spill.iter().filter(|(d, _)| d.year() == year) {
                    for label in labels {
                        holidays.insert(date, label.as_str(), self.settings.collision_policy)?;
                    }
                }
            }
        }
        tracing::debug!(year, closed_days = holidays.len(), "built desk calendar");
        Ok(DeskCalendar::new(format!("Help Desk {year}"), holidays))
    }
}

// ── Default-settings shorthands ───────────────────────────────────────────────

/// [`HolidayResolver::easter_and_good_friday`] with default settings.
pub fn easter_and_good_friday(year: i32) -> Result<HolidayCalendar> {
    HolidayResolver::new().easter_and_good_friday(year)
}

/// [`HolidayResolver::memorial_day`] with default settings.
pub fn memorial_day(year: i32) -> Result<HolidayCalendar> {
    HolidayResolver::new().memorial_day(year)
}

/// [`HolidayResolver::independence_day`] with default settings.
pub fn independence_day(year: i32) -> Result<HolidayCalendar> {
    HolidayResolver::new().independence_day(year)
}

/// [`HolidayResolver::thanksgiving`] with default settings.
pub fn thanksgiving(year: i32) -> Result<HolidayCalendar> {
    HolidayResolver::new().thanksgiving(year)
}

/// [`HolidayResolver::winter_celebration`] with default settings.
pub fn winter_celebration(year: i32) -> Result<HolidayCalendar> {
    HolidayResolver::new().winter_celebration(year)
}

/// [`HolidayResolver::all_holidays`] with default settings.
pub fn all_holidays(year: i32) -> Result<HolidayCalendar> {
    HolidayResolver::new().all_holidays(year)
}
