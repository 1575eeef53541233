//! File-backed ledger with per-user locking.
//!
//! Each user's document lives in `<dir>/<user_id>.json` and is always read
//! and rewritten whole. A crash in the middle of a write can leave a
//! truncated file behind. A file that does not parse is moved aside to
//! `<user_id>.json.bak` and the user starts over with an empty document.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use te_core::{RollRecord, Settings};

use crate::clock::{Clock, DayKey, SystemClock};
use crate::document::{DailyEntry, UserDocument};
use crate::error::{LedgerError, LedgerResult};
use crate::quota::Quota;

/// Per-user daily roll history stored as one JSON file per user.
pub struct Ledger {
    dir: PathBuf,
    clock: Arc<dyn Clock>,
    /// user id -> lock guarding that user's file
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("dir", &self.dir)
            .field("today", &self.today())
            .finish_non_exhaustive()
    }
}

impl Ledger {
    /// Open a ledger in `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> LedgerResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| LedgerError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            clock: Arc::new(SystemClock),
            locks: Mutex::new(HashMap::new()),
        })
    }

    /// Replace the clock that decides the current day.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// The day rolls are currently booked under.
    pub fn today(&self) -> DayKey {
        self.clock.today()
    }

    /// Path of the file backing `user_id`.
    pub fn path_for(&self, user_id: &str) -> LedgerResult<PathBuf> {
        validate_user_id(user_id)?;
        Ok(self.dir.join(format!("{user_id}.json")))
    }

    /// Number of rolls `user_id` performed today.
    pub fn count_today(&self, user_id: &str) -> LedgerResult<usize> {
        self.update(user_id, |entry| Ok::<_, LedgerError>(entry.count()))
    }

    /// Rolls `user_id` may still perform today.
    pub fn remaining(&self, user_id: &str, settings: &Settings) -> LedgerResult<Quota> {
        self.update(user_id, |entry| {
            Ok::<_, LedgerError>(entry.remaining(settings, user_id))
        })
    }

    /// Append rolls to today's entry and persist. Returns today's new total.
    pub fn append(&self, user_id: &str, records: Vec<RollRecord>) -> LedgerResult<usize> {
        self.update(user_id, |entry| {
            entry.append(records);
            Ok::<_, LedgerError>(entry.count())
        })
    }

    /// Today's rolls for `user_id`, oldest first.
    pub fn history(&self, user_id: &str) -> LedgerResult<Vec<RollRecord>> {
        self.update(user_id, |entry| Ok::<_, LedgerError>(entry.records().to_vec()))
    }

    /// Run `f` on today's entry for `user_id` while holding that user's lock.
    ///
    /// The document is written back only when `f` succeeds and appended at
    /// least one roll, so a failed or read-only closure never touches the
    /// file.
    pub fn update<T, E, F>(&self, user_id: &str, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut DailyEntry<'_>) -> Result<T, E>,
        E: From<LedgerError>,
    {
        let path = self.path_for(user_id)?;
        let lock = self.user_lock(user_id);
        let _guard = lock.lock();

        let mut doc = self.read_document(&path)?;
        let day = self.today();
        let (value, appended) = {
            let mut entry = doc.entry(day, user_id);
            let value = f(&mut entry)?;
            (value, entry.appended())
        };

        if appended > 0 {
            self.write_document(&path, &doc)?;
            log::debug!("ledger {user_id}: +{appended} roll(s) on {day}");
        }
        Ok(value)
    }

    fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock();
        Arc::clone(locks.entry(user_id.to_string()).or_default())
    }

    fn read_document(&self, path: &Path) -> LedgerResult<UserDocument> {
        if !path.exists() {
            return Ok(UserDocument::new());
        }
        let text = fs::read_to_string(path).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match serde_json::from_str(&text) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                let backup = backup_path(path);
                fs::rename(path, &backup).map_err(|source| LedgerError::Io {
                    path: backup.clone(),
                    source,
                })?;
                log::warn!(
                    "unreadable ledger {} moved to {}, treating as empty: {e}",
                    path.display(),
                    backup.display()
                );
                Ok(UserDocument::new())
            }
        }
    }

    fn write_document(&self, path: &Path, doc: &UserDocument) -> LedgerResult<()> {
        let json = serde_json::to_string_pretty(doc).map_err(|source| LedgerError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// First free `<file>.bak`, then `<file>.1.bak`, `<file>.2.bak`, ...
fn backup_path(path: &Path) -> PathBuf {
    let mut backup = PathBuf::from(format!("{}.bak", path.display()));
    let mut n = 1;
    while backup.exists() {
        backup = PathBuf::from(format!("{}.{n}.bak", path.display()));
        n += 1;
    }
    backup
}

/// User ids double as file names, so they must stay inside the ledger dir.
fn validate_user_id(user_id: &str) -> LedgerResult<()> {
    let bad = user_id.is_empty()
        || user_id == "."
        || user_id == ".."
        || user_id.contains(['/', '\\', '\0']);
    if bad {
        Err(LedgerError::InvalidUserId(user_id.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use te_core::{Config, generate_rolls};
    use tempfile::TempDir;

    fn ledger_on(dir: &TempDir, day: u32) -> Ledger {
        Ledger::open(dir.path())
            .unwrap()
            .with_clock(FixedClock::on(2025, 6, day).unwrap())
    }

    fn rolls(n: u32, seed: u64) -> Vec<RollRecord> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_rolls(&Config::default(), n, &mut rng).unwrap()
    }

    #[test]
    fn empty_ledger() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_on(&dir, 1);
        assert_eq!(ledger.count_today("1").unwrap(), 0);
        assert!(ledger.history("1").unwrap().is_empty());
        assert!(!ledger.path_for("1").unwrap().exists(), "reads never create files");
    }

    #[test]
    fn append_then_history_keeps_order() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_on(&dir, 1);
        let batch = rolls(5, 11);

        assert_eq!(ledger.append("1", batch.clone()).unwrap(), 5);
        assert_eq!(ledger.count_today("1").unwrap(), 5);
        assert_eq!(ledger.history("1").unwrap(), batch);
    }

    #[test]
    fn batches_accumulate() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_on(&dir, 1);
        let first = rolls(2, 1);
        let second = rolls(3, 2);
        ledger.append("1", first.clone()).unwrap();
        ledger.append("1", second.clone()).unwrap();

        let expected: Vec<_> = first.into_iter().chain(second).collect();
        assert_eq!(ledger.history("1").unwrap(), expected);
    }

    #[test]
    fn history_is_per_day() {
        let dir = TempDir::new().unwrap();
        ledger_on(&dir, 1).append("1", rolls(4, 1)).unwrap();

        let tomorrow = ledger_on(&dir, 2);
        assert_eq!(tomorrow.count_today("1").unwrap(), 0);
        tomorrow.append("1", rolls(1, 2)).unwrap();

        // Yesterday survives the rewrite.
        let text = fs::read_to_string(dir.path().join("1.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 2);
        assert_eq!(ledger_on(&dir, 1).count_today("1").unwrap(), 4);
    }

    #[test]
    fn users_are_isolated() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_on(&dir, 1);
        ledger.append("1", rolls(3, 1)).unwrap();
        assert_eq!(ledger.count_today("2").unwrap(), 0);
        assert!(dir.path().join("1.json").exists());
        assert!(!dir.path().join("2.json").exists());
    }

    #[test]
    fn remaining_respects_limit_and_whitelist() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_on(&dir, 1);
        let mut settings = Settings::default();
        settings.white_list.insert("vip".to_string());

        ledger.append("1", rolls(6, 1)).unwrap();
        ledger.append("vip", rolls(30, 2)).unwrap();

        assert_eq!(ledger.remaining("1", &settings).unwrap(), Quota::Limited(14));
        assert_eq!(ledger.remaining("vip", &settings).unwrap(), Quota::Unlimited);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_on(&dir, 1);
        fs::write(ledger.path_for("1").unwrap(), "{\"2025-06-01\": [trunc").unwrap();

        assert_eq!(ledger.count_today("1").unwrap(), 0);
        ledger.append("1", rolls(1, 1)).unwrap();
        assert_eq!(ledger.count_today("1").unwrap(), 1);
    }

    #[test]
    fn unparsable_file_is_kept_as_backup() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_on(&dir, 1);
        // One bad key makes the whole document unreadable.
        let original = r#"{"2025-05-31": {"1": []}, "notes": {"1": []}}"#;
        fs::write(ledger.path_for("1").unwrap(), original).unwrap();

        ledger.append("1", rolls(2, 1)).unwrap();

        let backup = dir.path().join("1.json.bak");
        assert_eq!(fs::read_to_string(&backup).unwrap(), original);
        assert_eq!(ledger.count_today("1").unwrap(), 2);
    }

    #[test]
    fn backups_do_not_overwrite_each_other() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_on(&dir, 1);
        let path = ledger.path_for("1").unwrap();

        fs::write(&path, "first").unwrap();
        assert_eq!(ledger.count_today("1").unwrap(), 0);
        fs::write(&path, "second").unwrap();
        assert_eq!(ledger.count_today("1").unwrap(), 0);

        assert_eq!(fs::read_to_string(dir.path().join("1.json.bak")).unwrap(), "first");
        assert_eq!(fs::read_to_string(dir.path().join("1.json.1.bak")).unwrap(), "second");
        assert!(!path.exists());
    }

    #[test]
    fn file_matches_documented_shape() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_on(&dir, 9);
        ledger.append("123", rolls(1, 5)).unwrap();

        let text = fs::read_to_string(dir.path().join("123.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        let stat = &json["2025-06-09"]["123"][0][0];
        for key in ["name", "icon", "value", "is_percent", "is_max"] {
            assert!(stat.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn failed_update_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_on(&dir, 1);
        let result: LedgerResult<()> = ledger.update("1", |entry| {
            entry.append(rolls(2, 1));
            Err(LedgerError::InvalidDay("abort".to_string()))
        });
        assert!(result.is_err());
        assert_eq!(ledger.count_today("1").unwrap(), 0);
    }

    #[test]
    fn rejects_path_like_user_ids() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_on(&dir, 1);
        for id in ["", ".", "..", "../x", "a/b", "a\\b"] {
            assert!(
                matches!(ledger.count_today(id), Err(LedgerError::InvalidUserId(_))),
                "{id:?} should be rejected"
            );
        }
    }

    #[test]
    fn concurrent_appends_lose_nothing() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_on(&dir, 1);

        std::thread::scope(|s| {
            for t in 0..8u64 {
                let ledger = &ledger;
                s.spawn(move || {
                    for i in 0..5 {
                        let user = if t % 2 == 0 { "even" } else { "odd" };
                        ledger.append(user, rolls(1, t * 100 + i)).unwrap();
                    }
                });
            }
        });

        assert_eq!(ledger.count_today("even").unwrap(), 20);
        assert_eq!(ledger.count_today("odd").unwrap(), 20);
    }
}
