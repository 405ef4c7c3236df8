//! Game rules shared by every table variant.
//!
//! - `LifeCounter`: the operations a presentation layer drives
//! - `check_for_losers` / `check_for_loser`: pure loss and win detection
//!
//! Detection is a function of the roster alone so it can be tested without
//! any table or UI around it.

pub mod engine;
pub mod losers;

pub use engine::{GameResult, LifeCounter};
pub use losers::{
    check_for_loser, check_for_losers, duel_loser_message, loser_message, LossReport, DRAW_MESSAGE,
};
