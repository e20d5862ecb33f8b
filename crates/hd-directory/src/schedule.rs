//! Team opening hours.
//!
//! A team may publish several schedule types (e.g. `"phone"`, `"walk-in"`).
//! Each entry opens the desk on one weekday from `start` (inclusive) to
//! `end` (exclusive); a day may hold several entries.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use hd_core::errors::{Error, Result};
use hd_core::utilities::normalize_key;
use hd_holidays::HolidayCalendar;
use hd_time::{ClockTime, Date, Weekday};

use crate::payload;
use crate::store::{MemoryStore, Record, RecordStore};

const FIELDS: [&str; 5] = ["team", "day", "start", "end", "type"];

/// One opening window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    /// Store-generated identifier.
    pub id: u64,
    /// Owning team.
    pub team: String,
    /// Schedule type.
    #[serde(rename = "type")]
    pub schedule_type: String,
    /// Weekday the window applies to.
    pub day: Weekday,
    /// Opening time.
    pub start: ClockTime,
    /// Closing time, strictly after `start`.
    pub end: ClockTime,
}

impl ScheduleEntry {
    fn belongs_to(&self, team: &str, schedule_type: &str) -> bool {
        normalize_key(&self.team) == normalize_key(team)
            && normalize_key(&self.schedule_type) == normalize_key(schedule_type)
    }

    /// Whether this window covers `time` (`start <= time < end`).
    pub fn covers(&self, time: ClockTime) -> bool {
        self.start <= time && time < self.end
    }

    fn slot(&self) -> HoursSlot {
        HoursSlot {
            id: self.id,
            start: self.start,
            end: self.end,
        }
    }
}

impl std::fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} hours {} {}-{}",
            self.team, self.schedule_type, self.day, self.start, self.end
        )
    }
}

impl Record for ScheduleEntry {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.belongs_to(&other.team, &other.schedule_type)
            && self.day == other.day
            && self.start == other.start
            && self.end == other.end
    }
}

/// `{id, start, end}` as listed by [`TeamSchedules::schedule`] and
/// [`TeamSchedules::hours`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoursSlot {
    /// Entry id.
    pub id: u64,
    /// Opening time.
    pub start: ClockTime,
    /// Closing time.
    pub end: ClockTime,
}

fn check_window(start: ClockTime, end: ClockTime) -> Result<()> {
    if start < end {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "opening time {start} must be before closing time {end}"
        )))
    }
}

/// CRUD over [`ScheduleEntry`] records.
#[derive(Clone)]
pub struct TeamSchedules {
    store: Arc<dyn RecordStore<ScheduleEntry>>,
}

impl std::fmt::Debug for TeamSchedules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamSchedules").finish_non_exhaustive()
    }
}

impl Default for TeamSchedules {
    fn default() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}

impl TeamSchedules {
    /// Schedules over the given store.
    pub fn new(store: Arc<dyn RecordStore<ScheduleEntry>>) -> Self {
        Self { store }
    }

    /// An empty, in-memory schedule set.
    pub fn in_memory() -> Self {
        Self::default()
    }

    fn entries(&self, team: &str, schedule_type: &str) -> Result<Vec<ScheduleEntry>> {
        let mut found: Vec<_> = self
            .store
            .fetch_all()?
            .into_iter()
            .filter(|e| e.belongs_to(team, schedule_type))
            .collect();
        found.sort_by_key(|e| (e.day, e.start, e.end, e.id));
        Ok(found)
    }

    /// The full week for `team`'s `schedule_type`, by weekday then opening
    /// time.
    ///
    /// # Errors
    /// [`Error::NotFound`] if there are no entries.
    pub fn schedule(
        &self,
        team: &str,
        schedule_type: &str,
    ) -> Result<BTreeMap<Weekday, Vec<HoursSlot>>> {
        let entries = self.entries(team, schedule_type)?;
        tracing::debug!(team, schedule_type, count = entries.len(), "schedule lookup");
        if entries.is_empty() {
            return Err(Error::NotFound(format!(
                "no '{schedule_type}' schedule for team '{team}'"
            )));
        }
        let mut week: BTreeMap<Weekday, Vec<HoursSlot>> = BTreeMap::new();
        for entry in &entries {
            week.entry(entry.day).or_default().push(entry.slot());
        }
        Ok(week)
    }

    /// The windows for one weekday.
    pub fn hours(&self, team: &str, schedule_type: &str, day: Weekday) -> Result<Vec<HoursSlot>> {
        let slots: Vec<_> = self
            .entries(team, schedule_type)?
            .iter()
            .filter(|e| e.day == day)
            .map(ScheduleEntry::slot)
            .collect();
        if slots.is_empty() {
            return Err(Error::NotFound(format!(
                "no '{schedule_type}' hours for team '{team}' on {day}"
            )));
        }
        Ok(slots)
    }

    /// The entry with `id`.
    pub fn hours_by_id(&self, id: u64) -> Result<ScheduleEntry> {
        self.store
            .fetch(&id.to_string())?
            .ok_or_else(|| Error::NotFound(format!("no schedule entry with id {id}")))
    }

    /// Add an opening window from a payload carrying `team`, `type`, `day`,
    /// `start` and `end`.  Returns the generated id.
    ///
    /// # Errors
    /// [`Error::Validation`] for missing fields or `start >= end`,
    /// [`Error::InvalidArgument`] for an unknown weekday or malformed time,
    /// [`Error::Duplicate`] for an identical existing window.
    pub fn create_hours(&self, payload: &Value) -> Result<u64> {
        let map = payload::require(payload, &FIELDS, "schedule entry")?;
        let start: ClockTime = payload::required_string(map, "start")?.parse()?;
        let end: ClockTime = payload::required_string(map, "end")?.parse()?;
        check_window(start, end)?;
        let entry = ScheduleEntry {
            id: self.store.next_id(),
            team: payload::required_string(map, "team")?,
            schedule_type: payload::required_string(map, "type")?,
            day: payload::required_string(map, "day")?.parse()?,
            start,
            end,
        };
        let id = entry.id;
        if let Err(err) = self.store.insert_if_absent(entry) {
            tracing::warn!(error = %err, "schedule entry not created");
            return Err(err);
        }
        tracing::info!(id, "schedule entry created");
        Ok(id)
    }

    /// Move the opening and/or closing time of the entry with `id`.  Every
    /// other field in `patch` is ignored.
    pub fn update_hours(&self, id: u64, patch: &Value) -> Result<ScheduleEntry> {
        let map = payload::object(patch, "schedule entry")?;
        let start = payload::string(map, "start")?
            .map(|s| s.parse::<ClockTime>())
            .transpose()?;
        let end = payload::string(map, "end")?
            .map(|s| s.parse::<ClockTime>())
            .transpose()?;
        let updated = self
            .store
            .update(&id.to_string(), &|current| {
                let mut next = current.clone();
                next.start = start.unwrap_or(current.start);
                next.end = end.unwrap_or(current.end);
                check_window(next.start, next.end)?;
                Ok(next)
            })?
            .ok_or_else(|| Error::NotFound(format!("no schedule entry with id {id}")))?;
        tracing::info!(id, start = %updated.start, end = %updated.end, "schedule entry updated");
        Ok(updated)
    }

    /// Remove the entry with `id`.
    pub fn delete_hours(&self, id: u64) -> Result<()> {
        self.store
            .delete(&id.to_string())?
            .ok_or_else(|| Error::NotFound(format!("no schedule entry with id {id}")))?;
        tracing::info!(id, "schedule entry deleted");
        Ok(())
    }

    /// Whether `team`'s `schedule_type` desk is open at `time` on `date`.
    ///
    /// Closed on every date in `holidays`; otherwise open if some window for
    /// the date's weekday covers `time`.
    ///
    /// # Errors
    /// [`Error::NotFound`] if the team has no such schedule at all.
    pub fn is_open(
        &self,
        team: &str,
        schedule_type: &str,
        date: Date,
        time: ClockTime,
        holidays: &HolidayCalendar,
    ) -> Result<bool> {
        let entries = self.entries(team, schedule_type)?;
        if entries.is_empty() {
            return Err(Error::NotFound(format!(
                "no '{schedule_type}' schedule for team '{team}'"
            )));
        }
        if let Some(label) = holidays.get(date) {
            tracing::debug!(team, date = %date, label = %label, "closed for holiday");
            return Ok(false);
        }
        let day = date.weekday();
        Ok(entries.iter().any(|e| e.day == day && e.covers(time)))
    }
}
