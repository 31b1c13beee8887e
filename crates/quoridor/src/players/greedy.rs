//! Shortest-path bot seat.

use super::PlayerAgent;
use anyhow::Result;
use strictly_quoridor::{GameState, Move, PlayerId, choose_move};
use tracing::debug;

/// Bot that races along its shortest path and walls when behind.
pub struct GreedyPlayer {
    name: String,
}

impl GreedyPlayer {
    /// Creates a new greedy bot.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl PlayerAgent for GreedyPlayer {
    fn next_move(&mut self, state: &GameState, me: PlayerId) -> Result<Move> {
        let mov = choose_move(state, me)?;
        debug!(bot = %self.name, %mov, "Bot chose move");
        Ok(mov)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
