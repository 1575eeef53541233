//! Daily roll ledger for TodayEcho.
//!
//! Every user owns one JSON document holding the rolls they performed, keyed
//! by day. The [`Ledger`] reads and rewrites those documents, answers quota
//! questions, and serializes all access to one user's document behind a
//! per-user lock.

pub mod clock;
pub mod document;
pub mod error;
pub mod ledger;
pub mod quota;

pub use clock::{Clock, DayKey, FixedClock, SystemClock};
pub use document::{DailyEntry, UserDocument};
pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use quota::Quota;
