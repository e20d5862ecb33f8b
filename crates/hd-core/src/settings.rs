//! Resolver settings.
//!
//! [`ResolverSettings`] is a plain value handed to the holiday resolver at
//! construction.  There is no process-wide instance: every caller decides
//! which year range and collision policy apply to its own calendars.

use serde::Deserialize;

use crate::errors::{Error, Result};

/// First year for which the Gregorian Easter computus is meaningful.
pub const GREGORIAN_REFORM_YEAR: i32 = 1583;

/// Last year a calendar can be resolved for.  The winter window reaches into
/// `year + 1`, which must still be a representable date.
pub const LAST_RESOLVABLE_YEAR: i32 = 9998;

/// What to do when two holiday rules land on the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Keep every label for the date, in rule order, without duplicates.
    #[default]
    Merge,
    /// The later rule replaces the earlier label.
    Overwrite,
    /// Fail with [`Error::AmbiguousRuleCollision`].
    Reject,
}

impl std::fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CollisionPolicy::Merge => "merge",
            CollisionPolicy::Overwrite => "overwrite",
            CollisionPolicy::Reject => "reject",
        };
        write!(f, "{s}")
    }
}

/// Settings consumed by the holiday resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverSettings {
    /// Smallest year accepted by the resolver (inclusive).
    pub min_year: i32,
    /// Largest year accepted by the resolver (inclusive).
    pub max_year: i32,
    /// Policy applied when rules coincide on a date.
    pub collision_policy: CollisionPolicy,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            min_year: GREGORIAN_REFORM_YEAR,
            max_year: LAST_RESOLVABLE_YEAR,
            collision_policy: CollisionPolicy::default(),
        }
    }
}

impl ResolverSettings {
    /// Parse settings from a JSON document.  Missing fields take their
    /// defaults.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the document is malformed or the year
    /// range is inconsistent.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: ResolverSettings =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Return a copy with a different collision policy.
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Return a copy restricted to `[min_year, max_year]`.
    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Check that the year range is non-empty and inside the resolvable span.
    pub fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(Error::Config(format!(
                "min_year {} is after max_year {}",
                self.min_year, self.max_year
            )));
        }
        if self.min_year < GREGORIAN_REFORM_YEAR || self.max_year > LAST_RESOLVABLE_YEAR {
            return Err(Error::Config(format!(
                "year range [{}, {}] must lie within [{GREGORIAN_REFORM_YEAR}, {LAST_RESOLVABLE_YEAR}]",
                self.min_year, self.max_year
            )));
        }
        Ok(())
    }

    /// Return `Ok(())` if `year` is accepted, `Error::InvalidArgument` otherwise.
    pub fn check_year(&self, year: i32) -> Result<()> {
        if (self.min_year..=self.max_year).contains(&year) {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "year {year} out of supported range [{}, {}]",
                self.min_year, self.max_year
            )))
        }
    }
}
