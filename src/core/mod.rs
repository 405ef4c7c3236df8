//! Core counter types: players, roster, history, configuration, intents.
//!
//! Everything here is plain data. Game flow lives in `rules` and `games`.

pub mod amount;
pub mod color;
pub mod config;
pub mod history;
pub mod intent;
pub mod player;
pub mod roster;

pub use amount::{parse_amount, signed_amount, Sign};
pub use color::{PlayerColor, PALETTE_SIZE};
pub use config::CounterConfig;
pub use history::{HistoryEntry, HistoryLog};
pub use intent::Intent;
pub use player::{Player, PlayerId};
pub use roster::Roster;
