//! # life-counter
//!
//! Life total tracking for tabletop card games.
//!
//! ## Design Principles
//!
//! 1. **Plain State**: Tables are ordinary structs mutated through
//!    `LifeCounter`. No UI framework, no reactivity primitives. A
//!    presentation layer calls a mutation, then re-renders from the
//!    accessors or a `TableSnapshot`.
//!
//! 2. **Derived, Not Stored**: Loser lines and the winner are recomputed
//!    from life totals on demand. A player healed above zero is no longer
//!    eliminated.
//!
//! 3. **Nothing Fails**: Intents that do not apply (unknown player, zero or
//!    malformed amount, seat cap reached, game in progress) are dropped.
//!
//! ## Modules
//!
//! - `core`: Players, roster, history, configuration, intents
//! - `rules`: `LifeCounter` trait and loss/win detection
//! - `games`: `Duel` (two fixed players) and `Table` (2-8 players)
//! - `error`: Configuration and parsing errors
//!
//! ## Example
//!
//! ```
//! use life_counter::{Intent, LifeCounter, PlayerId, Table};
//!
//! let mut table = Table::new();
//! table.apply_intent(Intent::adjust(PlayerId::new(0), -5));
//!
//! assert_eq!(table.life(PlayerId::new(0)), Some(15));
//! assert_eq!(table.history().lines(), vec!["Player 1 lost 5 life."]);
//! assert!(!table.can_add_player());
//! ```

pub mod core;
pub mod error;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    parse_amount, CounterConfig, HistoryEntry, HistoryLog, Intent, Player, PlayerColor, PlayerId,
    Roster, Sign,
};

pub use crate::error::{AmountError, ConfigError, RosterError};

pub use crate::games::duel::Duel;
pub use crate::games::table::{GameStatus, Table, TableSnapshot};

pub use crate::rules::{check_for_loser, check_for_losers, GameResult, LifeCounter, LossReport};
