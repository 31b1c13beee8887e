//! Seats: sources of moves for one side of the board.

mod greedy;
mod human;

pub use greedy::GreedyPlayer;
pub use human::HumanPlayer;

use crate::config::{SeatConfig, SeatKind};
use anyhow::Result;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use strictly_quoridor::{GameState, Move, MoveError, PlayerId};
use tracing::debug;

/// Trait for seats that can make moves.
pub trait PlayerAgent {
    /// Picks a move for `me` in `state`.
    fn next_move(&mut self, state: &GameState, me: PlayerId) -> Result<Move>;

    /// Returns the seat's display name.
    fn name(&self) -> &str;

    /// Called when the state refused the seat's last move.
    fn rejected(&mut self, _mov: Move, _error: &MoveError) {}
}

/// Builds the seat a config describes.
///
/// Human seats all read from `input`, so two of them can share one
/// terminal without each claiming it.
pub fn seat<R, W>(config: &SeatConfig, input: &Rc<RefCell<R>>, prompt: W) -> Box<dyn PlayerAgent>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    debug!(name = %config.name(), kind = %config.kind(), "Seating player");
    match config.kind() {
        SeatKind::Greedy => Box::new(GreedyPlayer::new(config.name())),
        SeatKind::Human => Box::new(HumanPlayer::new(config.name(), Rc::clone(input), prompt)),
    }
}
