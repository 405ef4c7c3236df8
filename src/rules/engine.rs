//! The boundary between game state and the presentation layer.
//!
//! Both table variants implement `LifeCounter`. A presentation layer calls
//! the mutation methods in response to user input, then re-renders from the
//! read accessors.
//!
//! ## Implementation Notes
//!
//! - Mutations never fail. Intents that do not apply are dropped and the
//!   method returns `false` (or `None`).
//! - Derived state (losers, winner) is recomputed from the roster, never
//!   cached across mutations.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{signed_amount, CounterConfig, Intent, PlayerId, Roster, Sign};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single player left standing.
    Winner(PlayerId),
    /// Nobody left standing.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// A life counter table.
pub trait LifeCounter {
    /// The configuration the table was built with.
    fn config(&self) -> &CounterConfig;

    /// Players in display order.
    fn roster(&self) -> &Roster;

    /// Apply a signed life change.
    ///
    /// Returns `false` for an unknown player or a zero delta, in which case
    /// nothing changes.
    fn adjust_life(&mut self, player: PlayerId, delta: i64) -> bool;

    /// Change a player's display name. Blank names are ignored.
    fn rename_player(&mut self, player: PlayerId, name: &str) -> bool;

    /// Loser lines for display, in roster order.
    fn loser_messages(&self) -> Vec<String>;

    /// The game result, if the current life totals decide one.
    fn result(&self) -> Option<GameResult>;

    /// Whether "Add Player" is currently enabled.
    fn can_add_player(&self) -> bool {
        false
    }

    /// Seat a new player. Returns the new ID, or `None` when disabled.
    fn add_player(&mut self) -> Option<PlayerId> {
        None
    }

    /// Start over. Returns `false` if the table has no reset.
    fn reset_game(&mut self) -> bool {
        false
    }

    // === Convenience Methods ===

    /// Apply a custom amount typed by the user.
    ///
    /// Text that is not a positive integer is ignored.
    fn adjust_custom(&mut self, player: PlayerId, text: &str, sign: Sign) -> bool {
        match signed_amount(text, sign) {
            Ok(delta) => self.adjust_life(player, delta),
            Err(err) => {
                trace!(%player, %err, "ignoring custom amount");
                false
            }
        }
    }

    /// Forward a presentation-layer intent. Returns whether state changed.
    fn apply_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Adjust { player, delta } => self.adjust_life(player, delta),
            Intent::AdjustCustom { player, text, sign } => self.adjust_custom(player, &text, sign),
            Intent::AddPlayer => self.add_player().is_some(),
            Intent::Reset => self.reset_game(),
            Intent::Rename { player, name } => self.rename_player(player, &name),
        }
    }

    /// Current life of a player.
    fn life(&self, player: PlayerId) -> Option<i64> {
        self.roster().get(player).map(|p| p.life)
    }

    /// The sole survivor, if there is one.
    fn winner(&self) -> Option<PlayerId> {
        match self.result() {
            Some(GameResult::Winner(p)) => Some(p),
            _ => None,
        }
    }
}
