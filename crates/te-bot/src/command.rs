//! Trigger matching for incoming command text.

use crate::numerals::extract_number;

/// Triggers that replay today's rolls.
pub const HISTORY_TRIGGERS: &[&str] = &["梭哈结果", "梭哈列表"];

/// Triggers that perform rolls, longest first.
pub const ROLL_TRIGGERS: &[&str] = &["重新梭哈", "梭哈"];

/// Words that mark a roll trigger as a mistyped history request.
const HISTORY_WORDS: &[&str] = &["列表", "结果"];

/// How many rolls a roll command asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRequest {
    /// Rolls to perform, at least 1.
    pub count: u32,
    /// Whether the text carried a number at all.
    pub explicit: bool,
}

impl RollRequest {
    /// Read the roll count from free text. Absent or zero means 1.
    pub fn parse(text: &str) -> Self {
        match extract_number(text) {
            Some(n) => Self {
                count: n.max(1),
                explicit: true,
            },
            None => Self {
                count: 1,
                explicit: false,
            },
        }
    }
}

/// A recognised bot command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Perform rolls.
    Roll(RollRequest),
    /// Show today's rolls.
    History,
}

impl Command {
    /// Match `text` against the triggers after stripping `prefix`.
    ///
    /// Returns `None` for text that is not addressed to the bot.
    pub fn parse(text: &str, prefix: &str) -> Option<Self> {
        let body = text.trim().strip_prefix(prefix)?.trim_start();

        if HISTORY_TRIGGERS.iter().any(|t| body.starts_with(*t)) {
            return Some(Self::History);
        }

        let trigger = ROLL_TRIGGERS.iter().find(|t| body.starts_with(**t))?;
        let rest = &body[trigger.len()..];
        if HISTORY_WORDS.iter().any(|w| rest.contains(*w)) {
            return None;
        }
        Some(Self::Roll(RollRequest::parse(rest)))
    }
}
