//! Roll bot orchestration for TodayEcho.
//!
//! Turns chat-style command text into rolls: parses the requested count,
//! checks the daily quota against the ledger, generates and persists the
//! batch, and hands the result to a [`Renderer`]. The chat transport and
//! the image backend stay outside this crate.

pub mod command;
pub mod config;
pub mod error;
pub mod numerals;
pub mod render;
pub mod reply;
pub mod session;

pub use command::{Command, RollRequest};
pub use config::BotConfig;
pub use error::{BotError, BotResult};
pub use render::{RenderError, Renderer, RollSheet};
pub use reply::{Rejection, Reply};
pub use session::{EchoBot, Sender};
