//! Two-player duel counter.
//!
//! - Exactly two players, "Player 1" and "Player 2", starting at 20 life
//! - +1/-1/+5/-5 buttons per player
//! - A single loser line: whichever player is at or below zero
//!
//! No history, no reset, no extra seats. Both players at or below zero is
//! reported as a draw.

mod game;

pub use game::Duel;
