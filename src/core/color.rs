//! Player display colors.
//!
//! Colors are assigned from a fixed ordered palette by `id mod palette_size`.
//! They repeat once player IDs run past the palette, which only happens when
//! a table allows more than [`PALETTE_SIZE`] players.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Number of colors in the palette.
pub const PALETTE_SIZE: usize = 8;

/// A display tag for a player. Has no effect on game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Orange,
    Purple,
    Teal,
    Pink,
    Yellow,
}

impl PlayerColor {
    /// The palette, in assignment order.
    pub const PALETTE: [PlayerColor; PALETTE_SIZE] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Orange,
        PlayerColor::Purple,
        PlayerColor::Teal,
        PlayerColor::Pink,
        PlayerColor::Yellow,
    ];

    /// Palette color for a player ID, wrapping around.
    ///
    /// ```
    /// use life_counter::core::{PlayerColor, PlayerId};
    ///
    /// assert_eq!(PlayerColor::for_player(PlayerId::new(0)), PlayerColor::Red);
    /// assert_eq!(PlayerColor::for_player(PlayerId::new(8)), PlayerColor::Red);
    /// ```
    #[must_use]
    pub const fn for_player(id: PlayerId) -> Self {
        Self::PALETTE[id.index() % PALETTE_SIZE]
    }

    /// Lowercase name, handy for CSS classes or asset lookups.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "red",
            PlayerColor::Blue => "blue",
            PlayerColor::Green => "green",
            PlayerColor::Orange => "orange",
            PlayerColor::Purple => "purple",
            PlayerColor::Teal => "teal",
            PlayerColor::Pink => "pink",
            PlayerColor::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
