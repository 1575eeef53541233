//! CLI frontend for the TodayEcho Echo roll bot.

mod commands;
mod console;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use console::OutputFormat;

#[derive(Parser)]
#[command(
    name = "todayecho",
    about = "TodayEcho: daily Echo substat rolls with a per-user ledger",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the config file and the ledger
    #[arg(short, long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// How roll results are rendered
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Console)]
    format: OutputFormat,

    /// Write the rendered result to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory with stat icons (`<name>.png`)
    #[arg(long, global = true)]
    icons: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll Echoes, e.g. `roll -u 1 梭哈三次` or `roll -u 1 5`
    Roll {
        /// User id
        #[arg(short, long)]
        user: String,

        /// Display name
        #[arg(short, long, default_value = "Player")]
        name: String,

        /// Count, as digits or numeral words (default: 1)
        text: Vec<String>,
    },

    /// Show today's rolls for a user
    History {
        /// User id
        #[arg(short, long)]
        user: String,

        /// Display name
        #[arg(short, long, default_value = "Player")]
        name: String,
    },

    /// Send one chat message through the trigger dispatcher
    Say {
        /// User id
        #[arg(short, long)]
        user: String,

        /// Display name
        #[arg(short, long, default_value = "Player")]
        name: String,

        /// Command prefix expected before triggers
        #[arg(long, default_value = "")]
        prefix: String,

        /// Message text, e.g. `梭哈5次` or `梭哈结果`
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Read chat messages from stdin, one per line
    Repl {
        /// User id
        #[arg(short, long)]
        user: String,

        /// Display name
        #[arg(short, long, default_value = "Player")]
        name: String,

        /// Command prefix expected before triggers
        #[arg(long, default_value = "")]
        prefix: String,
    },

    /// Inspect or create the substat config
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default config
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
    /// Print the substat table and settings
    Show,
    /// Print the config file path
    Path,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let ctx = commands::Context {
        data_dir: cli.data_dir,
        format: cli.format,
        output: cli.output,
        seed: cli.seed,
        icons: cli.icons,
    };

    let result = match cli.command {
        Commands::Roll { user, name, text } => commands::roll::run(&ctx, &user, &name, &text),
        Commands::History { user, name } => commands::history::run(&ctx, &user, &name),
        Commands::Say {
            user,
            name,
            prefix,
            text,
        } => commands::say::run(&ctx, &user, &name, &prefix, &text.join(" ")),
        Commands::Repl { user, name, prefix } => commands::repl::run(&ctx, &user, &name, &prefix),
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::config::init(&ctx, force),
            ConfigAction::Show => commands::config::show(&ctx),
            ConfigAction::Path => commands::config::path(&ctx),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
