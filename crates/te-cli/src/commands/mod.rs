pub mod config;
pub mod history;
pub mod repl;
pub mod roll;
pub mod say;

use std::path::PathBuf;

use colored::Colorize;

use te_bot::render::DirIconSource;
use te_bot::{BotConfig, EchoBot, Reply};
use te_core::ConfigStore;
use te_ledger::Ledger;

use crate::console::{AnyRenderer, OutputFormat};

/// Ledger files live in this subdirectory of the data dir.
const RECORDS_DIR: &str = "records";

/// Global options shared by every command.
pub struct Context {
    pub data_dir: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub icons: Option<PathBuf>,
}

impl Context {
    fn store(&self) -> ConfigStore {
        ConfigStore::in_dir(&self.data_dir)
    }
}

/// Load the config and ledger under the data dir and assemble the bot.
fn open_bot(ctx: &Context, prefix: &str) -> Result<EchoBot<AnyRenderer>, String> {
    let config = ctx.store().load().map_err(|e| e.to_string())?;
    let ledger = Ledger::open(ctx.data_dir.join(RECORDS_DIR)).map_err(|e| e.to_string())?;

    let mut options = BotConfig::default().with_prefix(prefix);
    if let Some(seed) = ctx.seed {
        options = options.with_seed(seed);
    }

    let renderer = AnyRenderer::new(ctx.format, ctx.icons.clone().map(DirIconSource::new));
    Ok(EchoBot::new(config, ledger, renderer, options))
}

/// Print a reply: its text message first, then the artifact.
fn deliver(ctx: &Context, reply: &Reply<String>) -> Result<(), String> {
    if let Some(message) = reply.message() {
        match reply {
            Reply::Rejected { .. } | Reply::NoHistory => println!("{}", message.yellow()),
            _ => println!("{}", message.dimmed()),
        }
    }

    let Some(artifact) = reply.artifact() else {
        return Ok(());
    };
    if let Some(path) = &ctx.output {
        std::fs::write(path, artifact)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Written to {}", path.display());
    } else {
        print!("{artifact}");
    }
    Ok(())
}
