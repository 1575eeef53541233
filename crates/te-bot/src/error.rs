//! Error types for the bot.

use thiserror::Error;

use crate::render::RenderError;

/// Result type for bot operations.
pub type BotResult<T> = Result<T, BotError>;

/// Errors that abort a command.
///
/// Quota rejections are not errors; they come back as
/// [`Reply::Rejected`](crate::Reply::Rejected).
#[derive(Debug, Error)]
pub enum BotError {
    /// Config or roll generation failed.
    #[error("{0}")]
    Core(#[from] te_core::CoreError),

    /// Reading or writing the ledger failed.
    #[error("{0}")]
    Ledger(#[from] te_ledger::LedgerError),

    /// The renderer could not produce an artifact.
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}
