//! Command-line interface for the match driver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quoridor - two-player wall-placement racing game
#[derive(Parser, Debug)]
#[command(name = "quoridor")]
#[command(about = "Play Quoridor between bots and humans", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match between the configured seats
    Play {
        /// Path to match configuration (two greedy bots if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the ply limit
        #[arg(long)]
        max_turns: Option<u32>,
    },

    /// Replay moves and suggest the next one
    Hint {
        /// Moves from the opening, e.g. "T 5 2" "H 4 7"
        moves: Vec<String>,

        /// Print the position as a JSON snapshot instead
        #[arg(long)]
        json: bool,
    },
}
