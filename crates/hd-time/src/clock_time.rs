//! `ClockTime`: a wall-clock time of day with minute resolution.

use std::str::FromStr;

use hd_core::errors::{Error, Result};
use hd_core::utilities::parse_clock_time;

/// Time of day, `00:00` through `23:59`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Construct from hour and minute.
    ///
    /// # Errors
    /// `InvalidArgument` if `hour > 23` or `minute > 59`.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidArgument(format!(
                "invalid clock time {hour}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Hour, 0–23.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, 0–59.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn minutes_since_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClockTime({self})")
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    /// Parse `H:MM`, `HH:MM`, or `HH:MM:00`.
    fn from_str(s: &str) -> Result<Self> {
        let (hour, minute) = parse_clock_time(s)
            .ok_or_else(|| Error::InvalidArgument(format!("invalid clock time '{s}'")))?;
        ClockTime::from_hm(hour, minute)
    }
}

impl serde::Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ClockTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<ClockTime> for chrono::NaiveTime {
    fn from(t: ClockTime) -> Self {
        chrono::NaiveTime::from_hms_opt(u32::from(t.hour), u32::from(t.minute), 0)
            .unwrap_or(chrono::NaiveTime::MIN)
    }
}
