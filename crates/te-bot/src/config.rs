//! Runtime options for the bot, separate from the substat config file.

/// Options for an [`EchoBot`](crate::EchoBot).
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Chance of attaching the usage hint to a roll without a count.
    pub hint_chance: f64,
    /// Command prefix stripped before trigger matching.
    pub prefix: String,
    /// Most rolls a single command may request, whitelisted users included.
    pub max_batch: u32,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hint_chance: 0.2,
            prefix: String::new(),
            max_batch: 100,
        }
    }
}

impl BotConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the hint chance (clamped to 0.0-1.0).
    pub fn with_hint_chance(mut self, chance: f64) -> Self {
        self.hint_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the command prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the per-command roll cap (at least 1).
    pub fn with_max_batch(mut self, max: u32) -> Self {
        self.max_batch = max.max(1);
        self
    }
}
