//! What "today" means for the ledger.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// A calendar day used as the outer key of a ledger document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Wrap a date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> LedgerResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| LedgerError::InvalidDay(s.to_string()))
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl TryFrom<String> for DayKey {
    type Error = LedgerError;

    fn try_from(s: String) -> LedgerResult<Self> {
        Self::parse(&s)
    }
}

impl From<DayKey> for String {
    fn from(day: DayKey) -> Self {
        day.to_string()
    }
}

/// Source of the current day.
pub trait Clock: Send + Sync {
    /// The day rolls are currently booked under.
    fn today(&self) -> DayKey;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DayKey {
        DayKey(Local::now().date_naive())
    }
}

/// A clock stuck on one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DayKey);

impl FixedClock {
    /// A clock fixed on the given date.
    pub fn on(year: i32, month: u32, day: u32) -> LedgerResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|d| Self(DayKey(d)))
            .ok_or_else(|| LedgerError::InvalidDay(format!("{year}-{month}-{day}")))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> DayKey {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_key_format() {
        let day = FixedClock::on(2025, 3, 7).unwrap().today();
        assert_eq!(day.to_string(), "2025-03-07");
        assert_eq!(DayKey::parse("2025-03-07").unwrap(), day);
    }

    #[test]
    fn day_key_rejects_garbage() {
        assert!(DayKey::parse("yesterday").is_err());
        assert!(DayKey::parse("2025-13-01").is_err());
        assert!(FixedClock::on(2025, 2, 30).is_err());
    }

    #[test]
    fn day_key_serde_as_string() {
        let day = DayKey::parse("2024-12-31").unwrap();
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"2024-12-31\"");
        let back: DayKey = serde_json::from_str("\"2024-12-31\"").unwrap();
        assert_eq!(back, day);
        assert!(serde_json::from_str::<DayKey>("\"31/12/2024\"").is_err());
    }
}
