//! `HolidayCalendar`: the resolved holidays of one year.
//!
//! Entries are kept in date order.  Each date carries one or more labels;
//! how a second label for an occupied date is handled is decided by the
//! caller's [`CollisionPolicy`].

use std::collections::{btree_map, BTreeMap};

use hd_core::errors::{Error, Result};
use hd_core::CollisionPolicy;
use hd_time::Date;
use serde::ser::SerializeMap;

/// Separator placed between labels that share a date.
pub const LABEL_SEPARATOR: &str = " / ";

/// An ordered mapping from date to holiday label(s).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    entries: BTreeMap<Date, Vec<String>>,
}

impl HolidayCalendar {
    /// Create an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `label` on `date`.
    ///
    /// Re-inserting a label already present on the date is a no-op under
    /// every policy.
    ///
    /// # Errors
    /// Returns [`Error::AmbiguousRuleCollision`] when the date already has a
    /// different label and `policy` is [`CollisionPolicy::Reject`].
    pub fn insert(
        &mut self,
        date: Date,
        label: impl Into<String>,
        policy: CollisionPolicy,
    ) -> Result<()> {
        let label = label.into();
        let Some(existing) = self.entries.get_mut(&date) else {
            self.entries.insert(date, vec![label]);
            return Ok(());
        };
        if existing.contains(&label) {
            return Ok(());
        }
        match policy {
            CollisionPolicy::Merge => existing.push(label),
            CollisionPolicy::Overwrite => {
                tracing::debug!(date = %date, replaced = ?existing, label = %label, "holiday label overwritten");
                *existing = vec![label];
            }
            CollisionPolicy::Reject => {
                tracing::warn!(date = %date, existing = ?existing, label = %label, "holiday rules collide");
                return Err(Error::AmbiguousRuleCollision {
                    date: date.to_string(),
                    existing: existing.join(LABEL_SEPARATOR),
                    incoming: label,
                });
            }
        }
        Ok(())
    }

    /// Fold every entry of `other` into `self`, in date order, label order.
    pub fn merge(&mut self, other: HolidayCalendar, policy: CollisionPolicy) -> Result<()> {
        for (date, labels) in other.entries {
            for label in labels {
                self.insert(date, label, policy)?;
            }
        }
        Ok(())
    }

    /// The label for `date`, with merged labels joined by [`LABEL_SEPARATOR`].
    pub fn get(&self, date: Date) -> Option<String> {
        self.entries.get(&date).map(|labels| labels.join(LABEL_SEPARATOR))
    }

    /// Every label recorded on `date` (empty if none).
    pub fn labels(&self, date: Date) -> &[String] {
        self.entries.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Return `true` if `date` is a holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Holiday dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.entries.keys().copied()
    }

    /// `(date, labels)` pairs in ascending date order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.entries.iter())
    }

    /// Dates carrying a given label.
    pub fn dates_labelled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = Date> + 'a {
        self.entries
            .iter()
            .filter(move |(_, labels)| labels.iter().any(|l| l == label))
            .map(|(d, _)| *d)
    }

    /// The `{ "<ISO-date>": "<label>" }` view, keys in ascending date order.
    pub fn to_json_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(d, labels)| (d.to_string(), labels.join(LABEL_SEPARATOR)))
            .collect()
    }

    /// Serialize to a JSON object string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl serde::Serialize for HolidayCalendar {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, labels) in &self.entries {
            map.serialize_entry(date, &labels.join(LABEL_SEPARATOR))?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a HolidayCalendar {
    type Item = (Date, &'a [String]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over `(date, labels)` pairs of a [`HolidayCalendar`].
#[derive(Debug, Clone)]
pub struct Iter<'a>(btree_map::Iter<'a, Date, Vec<String>>);

impl<'a> Iterator for Iter<'a> {
    type Item = (Date, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(d, labels)| (*d, labels.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(d, labels)| (*d, labels.as_slice()))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn merge_policy_keeps_both_labels() {
        let mut cal = HolidayCalendar::new();
        cal.insert(date(2024, 12, 25), "Christmas Celebration", CollisionPolicy::Merge)
            .unwrap();
        cal.insert(date(2024, 12, 25), "Staff Day", CollisionPolicy::Merge).unwrap();
        assert_eq!(cal.labels(date(2024, 12, 25)).len(), 2);
        assert_eq!(
            cal.get(date(2024, 12, 25)).as_deref(),
            Some("Christmas Celebration / Staff Day")
        );
    }

    #[test]
    fn overwrite_policy_is_last_writer_wins() {
        let mut cal = HolidayCalendar::new();
        cal.insert(date(2024, 12, 25), "A", CollisionPolicy::Overwrite).unwrap();
        cal.insert(date(2024, 12, 25), "B", CollisionPolicy::Overwrite).unwrap();
        assert_eq!(cal.get(date(2024, 12, 25)).as_deref(), Some("B"));
        assert_eq!(cal.len(), 1);
    }

    #[test]
    fn reject_policy_errors_on_distinct_labels_only() {
        let mut cal = HolidayCalendar::new();
        let d = date(2024, 12, 25);
        cal.insert(d, "A", CollisionPolicy::Reject).unwrap();
        // same label again is not a collision
        cal.insert(d, "A", CollisionPolicy::Reject).unwrap();
        let err = cal.insert(d, "B", CollisionPolicy::Reject).unwrap_err();
        assert!(matches!(err, Error::AmbiguousRuleCollision { .. }));
        assert_eq!(cal.get(d).as_deref(), Some("A"));
    }

    #[test]
    fn json_keys_are_iso_dates_in_order() {
        let mut cal = HolidayCalendar::new();
        cal.insert(date(2021, 7, 5), "4th of July", CollisionPolicy::Merge).unwrap();
        cal.insert(date(2021, 5, 31), "Memorial Day", CollisionPolicy::Merge).unwrap();
        assert_eq!(
            cal.to_json_string().unwrap(),
            r#"{"2021-05-31":"Memorial Day","2021-07-05":"4th of July"}"#
        );
        assert_eq!(cal.to_json_map().len(), 2);
    }

    #[test]
    fn dates_labelled_filters() {
        let mut cal = HolidayCalendar::new();
        cal.insert(date(2016, 12, 24), "Christmas Celebration", CollisionPolicy::Merge)
            .unwrap();
        cal.insert(date(2016, 12, 31), "New Year's Celebration", CollisionPolicy::Merge)
            .unwrap();
        let christmas: Vec<_> = cal.dates_labelled("Christmas Celebration").collect();
        assert_eq!(christmas, vec![date(2016, 12, 24)]);
    }

    #[test]
    fn borrowed_iteration_matches_iter() {
        let mut cal = HolidayCalendar::new();
        cal.insert(date(2024, 12, 25), "Christmas Celebration", CollisionPolicy::Merge)
            .unwrap();
        cal.insert(date(2024, 12, 25), "Staff Day", CollisionPolicy::Merge).unwrap();
        cal.insert(date(2024, 11, 28), "Thanksgiving", CollisionPolicy::Merge).unwrap();

        let mut seen = Vec::new();
        for (day, labels) in &cal {
            seen.push((day, labels.to_vec()));
        }
        let via_iter: Vec<_> = cal.iter().map(|(d, l)| (d, l.to_vec())).collect();
        assert_eq!(seen, via_iter);
        assert_eq!(seen[0].0, date(2024, 11, 28));
        assert_eq!(seen[1].1, ["Christmas Celebration", "Staff Day"]);
        assert_eq!(cal.iter().len(), 2);
        assert_eq!(cal.iter().next_back().map(|(d, _)| d), Some(date(2024, 12, 25)));
    }
}
