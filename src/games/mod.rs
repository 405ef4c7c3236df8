//! Table variants.
//!
//! - `duel`: fixed two-player counter
//! - `table`: 2-8 player counter with history and reset

pub mod duel;
pub mod table;
