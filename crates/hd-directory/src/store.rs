//! Record storage.
//!
//! [`RecordStore`] is the only seam between the directories and whatever
//! holds their records.  [`MemoryStore`] keeps everything in a
//! `BTreeMap` behind a `RwLock`; a poisoned lock is reported as
//! [`Error::Storage`] rather than propagated as a panic.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use hd_core::errors::{Error, Result};
use hd_core::utilities::normalize_key;

/// A value that can be kept in a [`RecordStore`].
pub trait Record: Clone + std::fmt::Display + Send + Sync + 'static {
    /// The record's primary key.  Stores compare keys case-insensitively.
    fn key(&self) -> String;

    /// Whether `self` and `other` violate a uniqueness constraint beyond the
    /// primary key (e.g. two attributes with the same name on one team).
    fn conflicts_with(&self, _other: &Self) -> bool {
        false
    }
}

/// Basic keyed storage for one record type.
pub trait RecordStore<R: Record>: Send + Sync {
    /// Every record, ordered by normalized key.
    fn fetch_all(&self) -> Result<Vec<R>>;

    /// The record stored under `key`, if any.
    fn fetch(&self, key: &str) -> Result<Option<R>>;

    /// Store `record` unless its key is taken or it conflicts with an
    /// existing record.  The check and the insert happen atomically.
    ///
    /// # Errors
    /// Returns [`Error::Duplicate`] on a clash.
    fn insert_if_absent(&self, record: R) -> Result<()>;

    /// Replace the record under `key` with `apply(current)`.
    ///
    /// The replacement may carry a different key.  Returns `Ok(None)` if no
    /// record is stored under `key`.
    ///
    /// # Errors
    /// Propagates errors from `apply`; returns [`Error::Duplicate`] if the
    /// replacement clashes with another record.
    fn update(&self, key: &str, apply: &dyn Fn(&R) -> Result<R>) -> Result<Option<R>>;

    /// Remove and return the record under `key`.
    fn delete(&self, key: &str) -> Result<Option<R>>;

    /// A fresh numeric identifier, unique for the lifetime of the store.
    fn next_id(&self) -> u64;
}

/// An in-memory, thread-safe [`RecordStore`].
#[derive(Debug)]
pub struct MemoryStore<R> {
    records: RwLock<BTreeMap<String, R>>,
    next_id: AtomicU64,
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl<R> MemoryStore<R> {
    /// Create an empty store.  Generated ids start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, R>>> {
        self.records
            .read()
            .map_err(|_| Error::Storage("record store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, R>>> {
        self.records
            .write()
            .map_err(|_| Error::Storage("record store lock poisoned".into()))
    }
}

fn clash<R: Record>(records: &BTreeMap<String, R>, skip: Option<&str>, record: &R) -> Option<R> {
    records
        .iter()
        .filter(|(k, _)| Some(k.as_str()) != skip)
        .map(|(_, r)| r)
        .find(|r| normalize_key(&r.key()) == normalize_key(&record.key()) || record.conflicts_with(r))
        .cloned()
}

impl<R: Record> RecordStore<R> for MemoryStore<R> {
    fn fetch_all(&self) -> Result<Vec<R>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn fetch(&self, key: &str) -> Result<Option<R>> {
        Ok(self.read()?.get(&normalize_key(key)).cloned())
    }

    fn insert_if_absent(&self, record: R) -> Result<()> {
        let mut records = self.write()?;
        if let Some(existing) = clash(&records, None, &record) {
            return Err(Error::Duplicate(format!("{record} clashes with existing {existing}")));
        }
        records.insert(normalize_key(&record.key()), record);
        Ok(())
    }

    fn update(&self, key: &str, apply: &dyn Fn(&R) -> Result<R>) -> Result<Option<R>> {
        let key = normalize_key(key);
        let mut records = self.write()?;
        let Some(current) = records.get(&key) else {
            return Ok(None);
        };
        let replacement = apply(current)?;
        if let Some(existing) = clash(&records, Some(&key), &replacement) {
            return Err(Error::Duplicate(format!(
                "{replacement} clashes with existing {existing}"
            )));
        }
        records.remove(&key);
        records.insert(normalize_key(&replacement.key()), replacement.clone());
        Ok(Some(replacement))
    }

    fn delete(&self, key: &str) -> Result<Option<R>> {
        Ok(self.write()?.remove(&normalize_key(key)))
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}
