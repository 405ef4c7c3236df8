//! Multi-player table counter.
//!
//! - Resets to four players at 20 life, "Player 1" through "Player 4"
//! - "Add Player" seats up to eight, only before play begins
//! - Every life change is logged ("Player 2 lost 5 life.")
//! - When one player is left standing the win is logged and the roster
//!   unlocks, but life totals stay on the board until a reset
//!
//! Supports any bounds a `CounterConfig` allows.

mod game;

pub use game::{GameStatus, Table, TableSnapshot};
