//! Quoridor match driver.
//!
//! Runs matches between seats (the greedy bot from `strictly_quoridor` or a
//! human typing move notation), configured from a TOML file.
//!
//! # Example
//!
//! ```
//! use quoridor::{GreedyPlayer, MatchConfig, Orchestrator, Outcome};
//!
//! let config = MatchConfig::default().with_show_board(false);
//! let mut game = Orchestrator::new(
//!     &config,
//!     Box::new(GreedyPlayer::new("ada")),
//!     Box::new(GreedyPlayer::new("bob")),
//!     std::io::sink(),
//! );
//! let outcome = game.run()?;
//! assert!(matches!(outcome, Outcome::Winner { .. } | Outcome::TurnLimit(_)));
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;

// Crate-level exports - Match configuration
pub use config::{ConfigError, MatchConfig, SeatConfig, SeatKind};

// Crate-level exports - Orchestration
pub use orchestrator::{Orchestrator, Outcome, replay};

// Crate-level exports - Seats
pub use players::{GreedyPlayer, HumanPlayer, PlayerAgent, seat};
