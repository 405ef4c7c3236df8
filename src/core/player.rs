//! Player identification and per-player table data.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. IDs are handed out sequentially by the
//! [`Roster`](super::Roster) and stay stable for the player's lifetime.
//!
//! ## Player
//!
//! A seat at the table: name, life total and display color.

use serde::{Deserialize, Serialize};

use super::color::PlayerColor;

/// Player identifier supporting up to 256 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`, and is
/// displayed as "Player 1".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the first `player_count` player IDs.
    ///
    /// ```
    /// use life_counter::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(256)).map(|i| PlayerId(i as u8))
    }

    /// Name given to a player with this ID until they are renamed.
    ///
    /// ```
    /// use life_counter::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).default_name(), "Player 1");
    /// assert_eq!(PlayerId::new(7).default_name(), "Player 8");
    /// ```
    #[must_use]
    pub fn default_name(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", u16::from(self.0) + 1)
    }
}

/// A player seated at the table.
///
/// Life totals are never clamped. Zero or negative life marks the player
/// as eliminated, but they stay in the roster and keep receiving
/// adjustments.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Stable identity.
    pub id: PlayerId,

    /// Display name, "Player N" by default.
    pub name: String,

    /// Current life total.
    pub life: i64,

    /// Display tag only.
    pub color: PlayerColor,
}

impl Player {
    /// Create a player with the default name and palette color for `id`.
    #[must_use]
    pub fn new(id: PlayerId, life: i64) -> Self {
        Self {
            id,
            name: id.default_name(),
            life,
            color: PlayerColor::for_player(id),
        }
    }

    /// Override the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Check if the player is still in the game (`life > 0`).
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Check if the player has been eliminated (`life <= 0`).
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        !self.is_alive()
    }

    /// Apply a signed change to the life total.
    ///
    /// Returns `false` and leaves life untouched if the result would not fit
    /// in an `i64`.
    #[must_use]
    pub fn adjust_life(&mut self, delta: i64) -> bool {
        match self.life.checked_add(delta) {
            Some(life) => {
                self.life = life;
                true
            }
            None => false,
        }
    }
}
