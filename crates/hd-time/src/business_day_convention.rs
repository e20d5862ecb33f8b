//! Rolling a closed day onto a day the desk is open.

use std::fmt;
use std::str::FromStr;

use hd_core::errors::{Error, Result};

/// Where a date lands when it is not a working day.
///
/// The "modified" rolls stay inside the calendar month: if the plain roll
/// would cross a month boundary, they roll the other way instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessDayConvention {
    /// Next open day.
    #[default]
    Following,
    /// Next open day, or the previous one if the next is in another month.
    ModifiedFollowing,
    /// Previous open day.
    Preceding,
    /// Previous open day, or the next one if the previous is in another month.
    ModifiedPreceding,
    /// Leave the date alone.
    Unadjusted,
    /// Closest open day, ties going forward.
    ///
    /// With only weekends closed this gives the federal observance shift:
    /// Saturday rolls to Friday, Sunday to Monday.
    Nearest,
}

impl BusinessDayConvention {
    /// Every convention, in declaration order.
    pub const ALL: [BusinessDayConvention; 6] = [
        Self::Following,
        Self::ModifiedFollowing,
        Self::Preceding,
        Self::ModifiedPreceding,
        Self::Unadjusted,
        Self::Nearest,
    ];

    /// Human-readable label, e.g. `"Modified Following"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Following => "Following",
            Self::ModifiedFollowing => "Modified Following",
            Self::Preceding => "Preceding",
            Self::ModifiedPreceding => "Modified Preceding",
            Self::Unadjusted => "Unadjusted",
            Self::Nearest => "Nearest",
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = Error;

    /// Accepts the label in any case, with or without the space
    /// (`"modifiedfollowing"`, `"Modified Following"`).
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.label().replace(' ', "").to_ascii_lowercase() == wanted)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown roll convention: {s:?}")))
    }
}
