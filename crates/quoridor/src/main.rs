//! Quoridor - match driver CLI
//!
//! Plays matches between configured seats, or replays a move list and
//! suggests the next move.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use quoridor::{MatchConfig, Orchestrator, replay, seat};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use strictly_quoridor::{Move, choose_move};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, max_turns } => run_match(config, max_turns),
        Command::Hint { moves, json } => run_hint(&moves, json),
    }
}

/// Play a match between the configured seats
#[instrument]
fn run_match(config: Option<PathBuf>, max_turns: Option<u32>) -> Result<()> {
    let mut config = match config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };
    if let Some(max_turns) = max_turns {
        config = config.with_max_turns(max_turns);
    }

    info!(
        player_one = %config.player_one().kind(),
        player_two = %config.player_two().kind(),
        "Seating players"
    );
    // Stdin is locked once and shared by every human seat.
    let input = Rc::new(RefCell::new(std::io::stdin().lock()));
    let mut game = Orchestrator::new(
        &config,
        seat(config.player_one(), &input, std::io::stdout()),
        seat(config.player_two(), &input, std::io::stdout()),
        std::io::stdout(),
    );
    let outcome = game.run()?;
    println!("{}", outcome);
    Ok(())
}

/// Replay moves and suggest the next one
#[instrument(skip(moves))]
fn run_hint(moves: &[String], json: bool) -> Result<()> {
    let (state, to_move) = replay(moves)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
        return Ok(());
    }

    println!("{}\n", state);
    if let Some(winner) = state.winner() {
        println!("Player {} has won", winner);
        return Ok(());
    }

    let destinations: Vec<String> = state
        .legal_destinations(to_move)
        .cells
        .iter()
        .map(|cell| Move::Token(*cell).to_string())
        .collect();
    println!("Player {} to move", to_move);
    println!("Destinations: {}", destinations.join(", "));
    println!("Suggested: {}", choose_move(&state, to_move)?);
    Ok(())
}
