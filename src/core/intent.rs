//! User intents forwarded by the presentation layer.
//!
//! Each button or text field maps onto one intent. Tables apply intents with
//! `LifeCounter::apply_intent`; intents that do not fit the current state
//! are dropped rather than reported.

use serde::{Deserialize, Serialize};

use super::amount::{signed_amount, Sign};
use super::player::PlayerId;

/// A user action against the table.
///
/// ```
/// use life_counter::core::{Intent, PlayerId, Sign};
///
/// // "+5" button on the first player's panel
/// let preset = Intent::adjust(PlayerId::new(0), 5);
///
/// // "-" next to the custom amount field
/// let custom = Intent::custom(PlayerId::new(0), "3", Sign::Minus);
/// assert_eq!(custom.delta(), Some(-3));
/// assert_eq!(preset.delta(), Some(5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Preset increment button.
    Adjust { player: PlayerId, delta: i64 },

    /// Custom amount field plus a +/- button.
    AdjustCustom { player: PlayerId, text: String, sign: Sign },

    /// "Add Player" button.
    AddPlayer,

    /// "Reset" button.
    Reset,

    /// Name field edited.
    Rename { player: PlayerId, name: String },
}

impl Intent {
    /// Preset adjustment.
    #[must_use]
    pub fn adjust(player: PlayerId, delta: i64) -> Self {
        Intent::Adjust { player, delta }
    }

    /// Custom-amount adjustment.
    #[must_use]
    pub fn custom(player: PlayerId, text: impl Into<String>, sign: Sign) -> Self {
        Intent::AdjustCustom { player, text: text.into(), sign }
    }

    /// Rename a player.
    #[must_use]
    pub fn rename(player: PlayerId, name: impl Into<String>) -> Self {
        Intent::Rename { player, name: name.into() }
    }

    /// The player this intent targets, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Intent::Adjust { player, .. }
            | Intent::AdjustCustom { player, .. }
            | Intent::Rename { player, .. } => Some(*player),
            Intent::AddPlayer | Intent::Reset => None,
        }
    }

    /// The signed life change this intent requests.
    ///
    /// `None` for non-adjusting intents and for custom text that does not
    /// parse as a positive amount.
    #[must_use]
    pub fn delta(&self) -> Option<i64> {
        match self {
            Intent::Adjust { delta, .. } => Some(*delta),
            Intent::AdjustCustom { text, sign, .. } => signed_amount(text, *sign).ok(),
            _ => None,
        }
    }
}
