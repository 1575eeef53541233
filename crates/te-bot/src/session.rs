//! The roll bot: one call per incoming command.
//!
//! A roll command goes through parse, quota check, generate and persist,
//! then render. The quota check and the ledger write happen under the
//! user's ledger lock, so two commands racing for the last rolls of the
//! day cannot both succeed. Rendering runs after the lock is released.

use chrono::Local;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;

use te_core::generator::chance;
use te_core::{Config, RollRecord, generate_rolls};
use te_ledger::{Ledger, Quota};

use crate::command::{Command, RollRequest};
use crate::config::BotConfig;
use crate::error::{BotError, BotResult};
use crate::render::{Renderer, RollSheet};
use crate::reply::{Rejection, Reply, USAGE_HINT};

/// Who sent a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    /// Stable user id, also the ledger file name.
    pub id: String,
    /// Display name for the footer.
    pub name: String,
}

impl Sender {
    /// A sender with an explicit display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// A sender shown under the default name.
    pub fn anonymous(id: impl Into<String>) -> Self {
        Self::new(id, "Player")
    }
}

/// Result of the locked part of a roll command.
enum Booking {
    Rejected(Rejection),
    Booked {
        records: Vec<RollRecord>,
        first_number: usize,
        remaining: Quota,
    },
}

/// The Echo roll bot.
pub struct EchoBot<R> {
    config: Config,
    options: BotConfig,
    ledger: Ledger,
    renderer: R,
    rng: Mutex<StdRng>,
}

impl<R: Renderer> EchoBot<R> {
    /// Assemble a bot from a loaded config, a ledger and a renderer.
    pub fn new(config: Config, ledger: Ledger, renderer: R, options: BotConfig) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            options,
            ledger,
            renderer,
            rng: Mutex::new(rng),
        }
    }

    /// The substat config in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The ledger in use.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Dispatch free text to the matching command.
    pub fn process(&self, sender: &Sender, text: &str) -> BotResult<Reply<R::Artifact>> {
        match Command::parse(text, &self.options.prefix) {
            Some(Command::Roll(request)) => self.roll(sender, request),
            Some(Command::History) => self.history(sender),
            None => Ok(Reply::Ignored),
        }
    }

    /// Perform the requested rolls for `sender`.
    pub fn roll(&self, sender: &Sender, request: RollRequest) -> BotResult<Reply<R::Artifact>> {
        let hint = (!request.explicit && self.coin(self.options.hint_chance))
            .then(|| USAGE_HINT.to_string());

        if request.count > self.options.max_batch {
            let rejection = Rejection::BatchTooLarge {
                requested: request.count,
                max: self.options.max_batch,
            };
            log::info!("user {}: roll x{} rejected: {rejection}", sender.id, request.count);
            return Ok(Reply::Rejected { rejection, hint });
        }

        let booking = self.ledger.update(&sender.id, |entry| {
            let remaining = entry.remaining(&self.config.settings, &sender.id);
            if remaining.is_exhausted() {
                return Ok::<_, BotError>(Booking::Rejected(Rejection::QuotaExhausted));
            }
            if !remaining.allows(request.count) {
                return Ok(Booking::Rejected(Rejection::InsufficientQuota {
                    requested: request.count,
                    remaining,
                }));
            }

            let first_number = entry.count() + 1;
            let records = {
                let mut rng = self.rng.lock();
                generate_rolls(&self.config, request.count, &mut rng)?
            };
            entry.append(records.iter().cloned());

            Ok(Booking::Booked {
                records,
                first_number,
                remaining: remaining.after(request.count),
            })
        })?;

        let (records, first_number, remaining) = match booking {
            Booking::Rejected(rejection) => {
                log::info!("user {}: roll x{} rejected: {rejection}", sender.id, request.count);
                return Ok(Reply::Rejected { rejection, hint });
            }
            Booking::Booked {
                records,
                first_number,
                remaining,
            } => (records, first_number, remaining),
        };

        let artifact = self.render(sender, &records, first_number, remaining)?;
        log::info!(
            "user {}({}) performed {} roll(s)",
            sender.id,
            sender.name,
            records.len()
        );

        Ok(Reply::Rendered {
            artifact,
            rolls: records.len(),
            remaining,
            hint,
        })
    }

    /// Replay today's rolls for `sender`, numbered from 1.
    pub fn history(&self, sender: &Sender) -> BotResult<Reply<R::Artifact>> {
        let (records, remaining) = self.ledger.update(&sender.id, |entry| {
            Ok::<_, BotError>((
                entry.records().to_vec(),
                entry.remaining(&self.config.settings, &sender.id),
            ))
        })?;

        if records.is_empty() {
            return Ok(Reply::NoHistory);
        }

        let artifact = self.render(sender, &records, 1, remaining)?;
        Ok(Reply::Rendered {
            artifact,
            rolls: records.len(),
            remaining,
            hint: None,
        })
    }

    fn render(
        &self,
        sender: &Sender,
        records: &[RollRecord],
        first_number: usize,
        remaining: Quota,
    ) -> BotResult<R::Artifact> {
        let sheet = RollSheet {
            records,
            first_number,
            user_name: &sender.name,
            remaining,
            settings: &self.config.settings,
            generated_at: Local::now(),
        };
        self.renderer.render(&sheet).map_err(|e| {
            log::error!("failed to render rolls for user {}: {e}", sender.id);
            BotError::Render(e)
        })
    }

    fn coin(&self, probability: f64) -> bool {
        chance(&mut self.rng.lock(), probability)
    }
}
