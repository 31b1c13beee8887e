//! Game orchestration between seats.

use crate::config::MatchConfig;
use crate::players::PlayerAgent;
use anyhow::Result;
use std::io::Write;
use strictly_quoridor::{GameState, Move, PlayerId};
use tracing::{debug, info, instrument, warn};

/// How a match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A player reached their goal row.
    Winner {
        /// Winning side.
        player: PlayerId,
        /// Winning seat's name.
        name: String,
        /// Plies played.
        turns: u32,
    },
    /// Nobody won within the ply limit.
    TurnLimit(u32),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner {
                player,
                name,
                turns,
            } => write!(f, "Player {} ({}) wins after {} moves", player, name, turns),
            Outcome::TurnLimit(turns) => write!(f, "No winner after {} moves", turns),
        }
    }
}

/// Orchestrates play between two seats.
pub struct Orchestrator<W> {
    state: GameState,
    seats: [Box<dyn PlayerAgent>; 2],
    max_turns: u32,
    max_retries: u32,
    show_board: bool,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator for a fresh match.
    pub fn new(
        config: &MatchConfig,
        player_one: Box<dyn PlayerAgent>,
        player_two: Box<dyn PlayerAgent>,
        out: W,
    ) -> Self {
        let state = GameState::new(player_one.name(), player_two.name());
        Self {
            state,
            seats: [player_one, player_two],
            max_turns: *config.max_turns(),
            max_retries: *config.max_retries(),
            show_board: *config.show_board(),
            out,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Runs the game loop until someone wins or the ply limit is hit.
    ///
    /// # Errors
    ///
    /// Fails when a seat cannot produce a move, or keeps submitting illegal
    /// moves past the retry limit.
    #[instrument(skip(self), fields(max_turns = self.max_turns))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting match");
        if self.show_board {
            writeln!(self.out, "{}\n", self.state)?;
        }

        let mut to_move = PlayerId::One;
        for turn in 0..self.max_turns {
            if let Some(outcome) = self.finished(turn) {
                return Ok(outcome);
            }
            self.play_turn(to_move)?;
            if self.show_board {
                writeln!(self.out, "{}\n", self.state)?;
            }
            to_move = to_move.opponent();
        }

        Ok(self
            .finished(self.max_turns)
            .unwrap_or(Outcome::TurnLimit(self.max_turns)))
    }

    fn finished(&self, turns: u32) -> Option<Outcome> {
        let player = self.state.winner()?;
        let name = self.seats[player.index()].name().to_string();
        info!(%player, %name, turns, "Match won");
        Some(Outcome::Winner {
            player,
            name,
            turns,
        })
    }

    fn play_turn(&mut self, id: PlayerId) -> Result<()> {
        let seat = &mut self.seats[id.index()];
        let mut rejections = 0;
        loop {
            debug!(player = %seat.name(), "Waiting for move");
            let mov = seat.next_move(&self.state, id)?;
            match self.state.apply(id, mov) {
                Ok(()) => {
                    writeln!(self.out, "{} ({}): {}", seat.name(), id, mov)?;
                    return Ok(());
                }
                Err(e) => {
                    rejections += 1;
                    warn!(player = %seat.name(), %mov, error = %e, rejections, "Move rejected");
                    seat.rejected(mov, &e);
                    if rejections > self.max_retries {
                        anyhow::bail!(
                            "{} submitted {} illegal moves in a row, last: {}",
                            seat.name(),
                            rejections,
                            e
                        );
                    }
                }
            }
        }
    }
}

/// Replays moves in notation from the opening position, alternating sides
/// starting with player One. Returns the state and the side to move.
///
/// # Errors
///
/// Fails on the first move that does not parse or is illegal.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[String]) -> Result<(GameState, PlayerId)> {
    let mut state = GameState::new("One", "Two");
    let mut to_move = PlayerId::One;
    for (ply, text) in moves.iter().enumerate() {
        let mov = text
            .parse::<Move>()
            .map_err(|e| anyhow::anyhow!("Move {} {:?}: {}", ply + 1, text, e))?;
        state
            .apply(to_move, mov)
            .map_err(|e| anyhow::anyhow!("Move {} {:?}: {}", ply + 1, text, e))?;
        to_move = to_move.opponent();
    }
    debug!(%to_move, "Replay finished");
    Ok((state, to_move))
}
