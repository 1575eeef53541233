//! The JSON document stored per user.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use te_core::{RollRecord, Settings};

use crate::clock::DayKey;
use crate::quota::Quota;

/// Everything stored for one user: day → user id → rolls, in roll order.
///
/// The inner user id level mirrors the on-disk format
/// `{ "<YYYY-MM-DD>": { "<userId>": [[stat, ...], ...] } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDocument {
    days: BTreeMap<DayKey, BTreeMap<String, Vec<RollRecord>>>,
}

impl UserDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable handle on one user's rolls for one day.
    pub fn entry(&mut self, day: DayKey, user_id: &str) -> DailyEntry<'_> {
        let records = self
            .days
            .entry(day)
            .or_default()
            .entry(user_id.to_string())
            .or_default();
        DailyEntry {
            records,
            appended: 0,
        }
    }
}

/// One user's rolls for the current day, handed out while the user's lock is held.
#[derive(Debug)]
pub struct DailyEntry<'a> {
    records: &'a mut Vec<RollRecord>,
    appended: usize,
}

impl DailyEntry<'_> {
    /// Rolls performed so far, including any appended through this handle.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// The rolls in order.
    pub fn records(&self) -> &[RollRecord] {
        self.records.as_slice()
    }

    /// Quota left for `user_id`.
    pub fn remaining(&self, settings: &Settings, user_id: &str) -> Quota {
        Quota::for_user(settings, user_id, self.count())
    }

    /// Append a batch of rolls, keeping their order.
    pub fn append(&mut self, records: impl IntoIterator<Item = RollRecord>) {
        let before = self.records.len();
        self.records.extend(records);
        self.appended += self.records.len() - before;
    }

    /// Rolls appended through this handle.
    pub fn appended(&self) -> usize {
        self.appended
    }
}
