//! The help desk's standard holiday rules.
//!
//! Five groups, evaluated in this order by `all_holidays`:
//!
//! | group              | dates                                                  |
//! |--------------------|--------------------------------------------------------|
//! | Easter             | Easter Sunday, Good Friday (Easter − 2)                |
//! | Memorial Day       | last Monday of May                                     |
//! | Independence Day   | July 4, Saturday → Friday, Sunday → Monday             |
//! | Thanksgiving       | fourth Thursday of November and the Friday after       |
//! | Winter celebration | Dec 24 – Jan 1, widened to the adjacent weekday when Christmas Eve or New Year's Day falls on a weekend |

use hd_core::errors::Result;
use hd_time::{Month, Weekday};

use crate::rule::{Direction, HolidayRule, RuleKind};

/// Label for Easter Sunday.
pub const EASTER: &str = "Easter";
/// Label for Good Friday.
pub const GOOD_FRIDAY: &str = "Good Friday";
/// Label for Memorial Day.
pub const MEMORIAL_DAY: &str = "Memorial Day";
/// Label for the observed Independence Day.
pub const INDEPENDENCE_DAY: &str = "4th of July";
/// Label for Thanksgiving Day.
pub const THANKSGIVING: &str = "Thanksgiving";
/// Label for the Friday after Thanksgiving.
pub const DAY_AFTER_THANKSGIVING: &str = "Day After Thanksgiving";
/// Label for the Christmas part of the winter window.
pub const CHRISTMAS_CELEBRATION: &str = "Christmas Celebration";
/// Label for the New Year part of the winter window.
pub const NEW_YEARS_CELEBRATION: &str = "New Year's Celebration";

/// One of the five standard holiday groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayGroup {
    /// Easter Sunday and Good Friday.
    Easter,
    /// Memorial Day.
    MemorialDay,
    /// Observed Independence Day.
    IndependenceDay,
    /// Thanksgiving and the day after.
    Thanksgiving,
    /// Christmas / New Year window.
    WinterCelebration,
}

impl HolidayGroup {
    /// All groups in evaluation order.
    pub const ALL: [HolidayGroup; 5] = [
        HolidayGroup::Easter,
        HolidayGroup::MemorialDay,
        HolidayGroup::IndependenceDay,
        HolidayGroup::Thanksgiving,
        HolidayGroup::WinterCelebration,
    ];

    /// The rules making up this group.
    pub fn rules(self) -> Result<Vec<HolidayRule>> {
        match self {
            HolidayGroup::Easter => Ok(vec![
                HolidayRule::new(EASTER, RuleKind::Easter)?,
                HolidayRule::new(GOOD_FRIDAY, RuleKind::Easter.offset(-2))?,
            ]),
            HolidayGroup::MemorialDay => Ok(vec![HolidayRule::new(
                MEMORIAL_DAY,
                RuleKind::last_weekday(Weekday::Monday, Month::May),
            )?]),
            HolidayGroup::IndependenceDay => Ok(vec![HolidayRule::new(
                INDEPENDENCE_DAY,
                RuleKind::fixed(Month::July, 4).observed(),
            )?]),
            HolidayGroup::Thanksgiving => {
                let thanksgiving = RuleKind::nth_weekday(4, Weekday::Thursday, Month::November);
                Ok(vec![
                    HolidayRule::new(THANKSGIVING, thanksgiving.clone())?,
                    HolidayRule::new(DAY_AFTER_THANKSGIVING, thanksgiving.offset(1))?,
                ])
            }
            HolidayGroup::WinterCelebration => winter_rules(),
        }
    }
}

impl std::fmt::Display for HolidayGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HolidayGroup::Easter => "Easter",
            HolidayGroup::MemorialDay => "Memorial Day",
            HolidayGroup::IndependenceDay => "Independence Day",
            HolidayGroup::Thanksgiving => "Thanksgiving",
            HolidayGroup::WinterCelebration => "Winter Celebration",
        };
        write!(f, "{s}")
    }
}

fn winter_rules() -> Result<Vec<HolidayRule>> {
    let mut rules = Vec::with_capacity(11);
    for day in 24..=30 {
        rules.push(HolidayRule::new(
            CHRISTMAS_CELEBRATION,
            RuleKind::fixed(Month::December, day),
        )?);
    }
    rules.push(HolidayRule::new(
        NEW_YEARS_CELEBRATION,
        RuleKind::fixed(Month::December, 31),
    )?);
    rules.push(
        HolidayRule::new(NEW_YEARS_CELEBRATION, RuleKind::fixed(Month::January, 1))?
            .in_year_offset(1),
    );
    rules.push(HolidayRule::new(
        CHRISTMAS_CELEBRATION,
        RuleKind::fixed(Month::December, 24).weekend_bridge(Direction::Backward),
    )?);
    rules.push(
        HolidayRule::new(
            NEW_YEARS_CELEBRATION,
            RuleKind::fixed(Month::January, 1).weekend_bridge(Direction::Forward),
        )?
        .in_year_offset(1),
    );
    Ok(rules)
}

/// Every standard rule, groups in evaluation order.
pub fn standard_rules() -> Result<Vec<HolidayRule>> {
    let mut rules = Vec::new();
    for group in HolidayGroup::ALL {
        rules.extend(group.rules()?);
    }
    Ok(rules)
}
