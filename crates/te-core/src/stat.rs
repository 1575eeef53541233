//! Substat definitions and rolled results.

use serde::{Deserialize, Serialize};

/// One entry of the substat table: a named attribute and the values it can roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatDefinition {
    /// Display name, e.g. "暴击".
    pub name: String,
    /// Icon asset name looked up by the renderer.
    pub icon: String,
    /// Candidate values, in table order.
    pub values: Vec<f64>,
    /// Whether values are percentages.
    pub is_percent: bool,
}

impl StatDefinition {
    /// Create a definition.
    pub fn new(name: &str, icon: &str, values: &[f64], is_percent: bool) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            values: values.to_vec(),
            is_percent,
        }
    }

    /// The best value this definition can roll, or `None` for an empty table.
    pub fn max_value(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

/// A single substat on a rolled Echo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolledStat {
    /// Display name copied from the definition.
    pub name: String,
    /// Icon asset name copied from the definition.
    pub icon: String,
    /// The rolled value.
    pub value: f64,
    /// Whether the value is a percentage.
    pub is_percent: bool,
    /// Whether the value is the maximum its definition allows.
    pub is_max: bool,
}

impl RolledStat {
    /// The value as shown to players: `11.6%` or `21.0%` for percentages,
    /// `50` otherwise. Percentages always keep a decimal digit.
    pub fn display_value(&self) -> String {
        if self.is_percent {
            format!("{:?}%", self.value)
        } else {
            format!("{}", self.value.trunc() as i64)
        }
    }
}

/// The substats produced by one roll, in draw order.
///
/// Serialized as a bare JSON array so ledger files read as
/// `[[stat, stat, ...], ...]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollRecord {
    stats: Vec<RolledStat>,
}

impl RollRecord {
    /// Wrap a list of rolled stats.
    pub fn new(stats: Vec<RolledStat>) -> Self {
        Self { stats }
    }

    /// The stats in draw order.
    pub fn stats(&self) -> &[RolledStat] {
        &self.stats
    }

    /// Number of stats on this roll.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Whether the roll has no stats.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
