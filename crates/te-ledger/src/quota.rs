//! Remaining daily rolls.

use te_core::Settings;

/// Tuners spent per roll, the unit players see quota in.
pub const TUNERS_PER_ROLL: u64 = 50;

/// How many more rolls a user may perform today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quota {
    /// Whitelisted: no daily limit.
    Unlimited,
    /// This many rolls remain.
    Limited(u32),
}

impl Quota {
    /// Quota left for `user_id` after `used` rolls today.
    pub fn for_user(settings: &Settings, user_id: &str, used: usize) -> Self {
        if settings.is_whitelisted(user_id) {
            return Self::Unlimited;
        }
        let used = u32::try_from(used).unwrap_or(u32::MAX);
        Self::Limited(settings.daily_limit.saturating_sub(used))
    }

    /// No rolls left.
    pub fn is_exhausted(self) -> bool {
        self == Self::Limited(0)
    }

    /// Whether `count` more rolls fit.
    pub fn allows(self, count: u32) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Limited(left) => count <= left,
        }
    }

    /// Quota left after spending `count` rolls.
    pub fn after(self, count: u32) -> Self {
        match self {
            Self::Unlimited => Self::Unlimited,
            Self::Limited(left) => Self::Limited(left.saturating_sub(count)),
        }
    }

    /// Remaining rolls as a number, `None` when unlimited.
    pub fn rolls(self) -> Option<u32> {
        match self {
            Self::Unlimited => None,
            Self::Limited(left) => Some(left),
        }
    }

    /// Remaining quota expressed in tuners, `∞` when unlimited.
    pub fn tuners(self) -> String {
        match self {
            Self::Unlimited => "∞".to_string(),
            Self::Limited(left) => (u64::from(left) * TUNERS_PER_ROLL).to_string(),
        }
    }
}

impl std::fmt::Display for Quota {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unlimited => write!(f, "unlimited"),
            Self::Limited(left) => write!(f, "{left}"),
        }
    }
}
