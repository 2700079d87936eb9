//! Terminal frontend for the Benagram text adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;

use bg_fiction::GameConfig;

#[derive(Parser)]
#[command(
    name = "benagram",
    about = "Benagram: a short text adventure about a village you should not visit after dark",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding save files
    #[arg(long, global = true)]
    save_dir: Option<PathBuf>,

    /// Save slot name
    #[arg(long, global = true)]
    slot: Option<String>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game, continuing the saved game if there is one
    Play {
        /// Ignore any saved game and start over
        #[arg(long)]
        new: bool,
    },

    /// Show the saved game
    Status,

    /// Delete the saved game
    Reset,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = GameConfig::default();
    if let Some(dir) = cli.save_dir {
        config = config.with_save_dir(dir);
    }
    if let Some(slot) = cli.slot {
        config = config.with_slot_name(slot);
    }
    debug!(path = %config.save_path().display(), "using save slot");

    let result = match cli.command {
        Commands::Play { new } => commands::play::run(&config, new),
        Commands::Status => commands::status::run(&config),
        Commands::Reset => commands::reset::run(&config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
