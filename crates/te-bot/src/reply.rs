//! What the bot sends back for a command.

use te_ledger::Quota;

/// Shown now and then when a roll command has no count.
pub const USAGE_HINT: &str = "梭哈可以跟随次数，如：梭哈5次";

/// Why a roll command was turned down. Nothing is written when this happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No rolls left today.
    QuotaExhausted,
    /// More rolls requested than one command may perform.
    BatchTooLarge {
        /// Rolls requested.
        requested: u32,
        /// The per-command cap.
        max: u32,
    },
    /// Fewer rolls left than requested.
    InsufficientQuota {
        /// Rolls requested.
        requested: u32,
        /// Rolls still available.
        remaining: Quota,
    },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExhausted => write!(f, "你今天的调谐器已经用完啦！"),
            Self::BatchTooLarge { max, .. } => write!(f, "一次最多只能梭哈 {max} 次！"),
            Self::InsufficientQuota { remaining, .. } => {
                write!(f, "你的调谐器不足！剩余调谐器 {}！", remaining.tuners())
            }
        }
    }
}

/// The bot's answer to one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<A> {
    /// Rolls were rendered into an artifact.
    Rendered {
        /// The renderer's output.
        artifact: A,
        /// Number of rolls on the artifact.
        rolls: usize,
        /// Quota left after the command.
        remaining: Quota,
        /// Usage hint to send alongside, if any.
        hint: Option<String>,
    },
    /// The roll was refused.
    Rejected {
        /// Why.
        rejection: Rejection,
        /// Usage hint sent before the refusal, if any.
        hint: Option<String>,
    },
    /// History was requested but there are no rolls today.
    NoHistory,
    /// The text was not a command for this bot.
    Ignored,
}

impl<A> Reply<A> {
    /// A text message for replies that carry no artifact.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Rendered { hint, .. } => hint.clone(),
            Self::Rejected { rejection, hint } => Some(match hint {
                Some(hint) => format!("{hint}\n{rejection}"),
                None => rejection.to_string(),
            }),
            Self::NoHistory => Some("你今天还没有梭哈过声骸呢！".to_string()),
            Self::Ignored => None,
        }
    }

    /// The rendered artifact, if any.
    pub fn artifact(&self) -> Option<&A> {
        match self {
            Self::Rendered { artifact, .. } => Some(artifact),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_quote_tuners() {
        assert_eq!(Rejection::QuotaExhausted.to_string(), "你今天的调谐器已经用完啦！");
        let r = Rejection::InsufficientQuota {
            requested: 5,
            remaining: Quota::Limited(3),
        };
        assert_eq!(r.to_string(), "你的调谐器不足！剩余调谐器 150！");
        let r = Rejection::BatchTooLarge {
            requested: 500,
            max: 100,
        };
        assert_eq!(r.to_string(), "一次最多只能梭哈 100 次！");
    }

    #[test]
    fn rejected_message_leads_with_hint() {
        let reply: Reply<String> = Reply::Rejected {
            rejection: Rejection::QuotaExhausted,
            hint: Some(USAGE_HINT.to_string()),
        };
        assert_eq!(
            reply.message().unwrap(),
            format!("{USAGE_HINT}\n你今天的调谐器已经用完啦！")
        );
        assert!(reply.artifact().is_none());
    }

    #[test]
    fn reply_message_and_artifact() {
        let reply: Reply<String> = Reply::Rendered {
            artifact: "img".to_string(),
            rolls: 1,
            remaining: Quota::Limited(19),
            hint: None,
        };
        assert_eq!(reply.artifact().map(String::as_str), Some("img"));
        assert_eq!(reply.message(), None);

        let none: Reply<String> = Reply::NoHistory;
        assert!(none.artifact().is_none());
        assert!(none.message().unwrap().contains("还没有"));
        assert_eq!(Reply::<String>::Ignored.message(), None);
    }
}
