//! Word Slot - CLI
//!
//! Terminal word-guessing game with TUI and plain line modes.

use anyhow::{Result, ensure};
use clap::{Parser, Subcommand};
use word_slot::{
    commands::run_simple,
    game::Rules,
    interactive::{App, run_tui},
    words::{DEFAULT_WORD_API, SourceSpec},
};

#[derive(Parser)]
#[command(
    name = "word_slot",
    about = "Guess the five letter word — terminal edition",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word source: 'web' (default), 'offline', or a path to a word file
    #[arg(short, long, global = true, default_value = "web")]
    source: String,

    /// Endpoint used when the source is 'web'
    #[arg(long, global = true, default_value = DEFAULT_WORD_API)]
    url: String,

    /// Maximum guesses before the word is revealed
    #[arg(long, global = true, default_value_t = 10)]
    max_guesses: usize,

    /// Guesses required before giving up is offered
    #[arg(long, global = true, default_value_t = 6)]
    give_up_after: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain line mode (one guess per line)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    ensure!(cli.max_guesses >= 1, "--max-guesses must be at least 1");
    ensure!(
        cli.give_up_after <= cli.max_guesses,
        "--give-up-after cannot exceed --max-guesses"
    );

    let rules = Rules::new(cli.max_guesses, cli.give_up_after);
    let spec = SourceSpec::parse(&cli.source, &cli.url);

    // Default to the TUI if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(rules, spec)),
        Commands::Simple => run_simple(rules, &spec).map_err(|e| anyhow::anyhow!(e)),
    }
}
