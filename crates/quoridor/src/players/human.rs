//! Human seat reading move notation line by line.

use super::PlayerAgent;
use anyhow::Result;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use strictly_quoridor::{GameState, Move, MoveError, PlayerId};
use tracing::{debug, warn};

/// Human player typing moves such as `T 5 2` or `H 3 4`.
///
/// Lines that do not parse are reported and re-read; the seat only gives up
/// when its input ends. Seats sharing a terminal share one input handle and
/// read from it in turn.
pub struct HumanPlayer<R, W> {
    name: String,
    input: Rc<RefCell<R>>,
    prompt: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human seat over a shared input and a prompt sink.
    pub fn new(name: impl Into<String>, input: Rc<RefCell<R>>, prompt: W) -> Self {
        Self {
            name: name.into(),
            input,
            prompt,
        }
    }
}

impl<R: BufRead, W: Write> PlayerAgent for HumanPlayer<R, W> {
    fn next_move(&mut self, state: &GameState, me: PlayerId) -> Result<Move> {
        let destinations = state.legal_destinations(me);
        let hint: Vec<String> = destinations
            .cells
            .iter()
            .map(|cell| Move::Token(*cell).to_string())
            .collect();

        loop {
            write!(
                self.prompt,
                "{} (player {}), your move [{}]: ",
                self.name,
                me,
                hint.join(", ")
            )?;
            self.prompt.flush()?;

            let mut line = String::new();
            if self.input.borrow_mut().read_line(&mut line)? == 0 {
                anyhow::bail!("Input closed before {} moved", self.name);
            }
            match line.trim().parse::<Move>() {
                Ok(mov) => {
                    debug!(player = %self.name, %mov, "Read move");
                    return Ok(mov);
                }
                Err(e) => {
                    warn!(player = %self.name, error = %e, "Unreadable move");
                    writeln!(self.prompt, "{}", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rejected(&mut self, mov: Move, error: &MoveError) {
        if let Err(e) = writeln!(self.prompt, "{} rejected: {}", mov, error) {
            warn!(error = %e, "Failed to report rejected move");
        }
    }
}
